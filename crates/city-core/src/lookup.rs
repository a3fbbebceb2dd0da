//! Category lookups with a visible fallback path

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured `name -> value` entry, as written in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFactor {
    pub name: String,
    pub value: f64,
}

impl NamedFactor {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Outcome of a table lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<T> {
    /// Key was present in the table
    Configured(T),
    /// Key was unknown, the table default was used
    Fallback(T),
}

impl<T> Lookup<T> {
    /// Resolved value, whichever path produced it
    pub fn value(self) -> T {
        match self {
            Lookup::Configured(v) | Lookup::Fallback(v) => v,
        }
    }

    /// Whether the default was used
    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// Named mapping from a category string to a numeric effect
#[derive(Debug, Clone)]
pub struct FactorTable {
    name: &'static str,
    entries: HashMap<String, f64>,
    default: f64,
}

impl FactorTable {
    /// Create a table with the value used for unknown keys
    pub fn new<I, K>(name: &'static str, default: f64, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name,
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            default,
        }
    }

    /// Build from configured entries; a repeated name keeps the last value
    pub fn from_entries(name: &'static str, default: f64, entries: &[NamedFactor]) -> Self {
        Self::new(
            name,
            default,
            entries.iter().map(|e| (e.name.clone(), e.value)),
        )
    }

    /// Look up a key, falling back to the table default
    pub fn get(&self, key: &str) -> Lookup<f64> {
        match self.entries.get(key) {
            Some(&v) => Lookup::Configured(v),
            None => Lookup::Fallback(self.default),
        }
    }

    /// Whether the key is configured
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Table name, used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value returned for unknown keys
    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Configured keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> FactorTable {
        FactorTable::new("weather", 0.0, [("Clear", 0.0), ("Storm", 1.5)])
    }

    #[test]
    fn test_configured_lookup() {
        let table = weather();
        assert_eq!(table.get("Storm"), Lookup::Configured(1.5));
        assert!(table.contains("Clear"));
    }

    #[test]
    fn test_fallback_lookup() {
        let table = weather();
        let hit = table.get("Hail");
        assert!(hit.is_fallback());
        assert_eq!(hit.value(), 0.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(weather().get("storm").is_fallback());
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![NamedFactor::new("Zone-A", 1.3), NamedFactor::new("Zone-D", 0.8)];
        let table = FactorTable::from_entries("zones", 1.0, &entries);
        assert_eq!(table.get("Zone-D").value(), 0.8);
        assert_eq!(table.get("Zone-Q"), Lookup::Fallback(1.0));
        assert_eq!(table.name(), "zones");
    }

    #[test]
    fn test_keys_sorted() {
        assert_eq!(weather().keys(), vec!["Clear", "Storm"]);
        assert_eq!(weather().len(), 2);
    }
}
