//! Outage factor tables

use crate::OutageError;
use city_core::NamedFactor;
use serde::{Deserialize, Serialize};

/// Cause, zone and weather tables plus estimator constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutageTables {
    /// Base restoration time by cause (hours)
    pub causes: Vec<NamedFactor>,
    /// Base time for an unrecognised cause (hours)
    pub default_base_hours: f64,

    /// Complexity multiplier by zone (1.0 = standard)
    pub zones: Vec<NamedFactor>,
    /// Multiplier for an unrecognised zone
    pub default_zone_factor: f64,

    /// Additive delay by weather (hours)
    pub weather: Vec<NamedFactor>,
    /// Delay for unrecognised weather (hours)
    pub default_weather_hours: f64,

    /// Symmetric jitter bound (hours)
    pub jitter_hours: f64,
    /// Lower clamp on the ETA (hours)
    pub min_eta_hours: f64,

    /// Confidence when the cause is recognised
    pub known_cause_confidence: f64,
    /// Confidence when the cause falls back to the default
    pub unknown_cause_confidence: f64,

    /// Reported model identifier
    pub model: String,
}

impl Default for OutageTables {
    fn default() -> Self {
        Self {
            causes: vec![
                NamedFactor::new("Equipment Failure", 4.5),
                NamedFactor::new("Weather", 6.0),
                NamedFactor::new("Overload", 3.0),
                NamedFactor::new("Maintenance", 2.5),
            ],
            default_base_hours: 4.0,
            zones: vec![
                NamedFactor::new("Zone-A", 1.3), // Downtown
                NamedFactor::new("Zone-B", 1.5), // Industrial
                NamedFactor::new("Zone-C", 1.0), // Residential
                NamedFactor::new("Zone-D", 0.8), // Suburban
            ],
            default_zone_factor: 1.0,
            weather: vec![
                NamedFactor::new("Clear", 0.0),
                NamedFactor::new("Rain", 0.5),
                NamedFactor::new("Storm", 1.5),
                NamedFactor::new("Snow", 2.0),
            ],
            default_weather_hours: 0.0,
            jitter_hours: 0.5,
            min_eta_hours: 0.5,
            known_cause_confidence: 0.85,
            unknown_cause_confidence: 0.70,
            model: "LightGBM-Regressor-v2.0".to_string(),
        }
    }
}

impl OutageTables {
    /// Reference tables without jitter
    pub fn deterministic() -> Self {
        Self {
            jitter_hours: 0.0,
            ..Default::default()
        }
    }

    /// Check every factor is usable
    pub fn validate(&self) -> Result<(), OutageError> {
        check_entries("causes", &self.causes, |v| v >= 0.0)?;
        check_entries("zones", &self.zones, |v| v >= 0.0)?;
        check_entries("weather", &self.weather, |_| true)?;
        check_value("causes", "<default>", self.default_base_hours, |v| v >= 0.0)?;
        check_value("zones", "<default>", self.default_zone_factor, |v| v >= 0.0)?;
        check_value("weather", "<default>", self.default_weather_hours, |_| true)?;

        if !self.jitter_hours.is_finite() || self.jitter_hours < 0.0 {
            return Err(OutageError::InvalidJitter(self.jitter_hours));
        }
        if !self.min_eta_hours.is_finite() || self.min_eta_hours <= 0.0 {
            return Err(OutageError::InvalidMinimum(self.min_eta_hours));
        }
        for confidence in [self.known_cause_confidence, self.unknown_cause_confidence] {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(OutageError::InvalidConfidence(confidence));
            }
        }
        Ok(())
    }
}

fn check_entries(
    table: &'static str,
    entries: &[NamedFactor],
    accept: impl Fn(f64) -> bool,
) -> Result<(), OutageError> {
    entries
        .iter()
        .try_for_each(|e| check_value(table, &e.name, e.value, &accept))
}

fn check_value(
    table: &'static str,
    key: &str,
    value: f64,
    accept: impl Fn(f64) -> bool,
) -> Result<(), OutageError> {
    if value.is_finite() && accept(value) {
        Ok(())
    } else {
        Err(OutageError::InvalidFactor {
            table,
            key: key.to_string(),
            value,
        })
    }
}
