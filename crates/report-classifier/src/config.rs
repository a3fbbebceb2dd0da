//! Category distribution and action table

use crate::category::ReportCategory;
use crate::ClassifierError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sampling weight and recommended action for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category: ReportCategory,
    pub weight: f64,
    pub action: String,
}

impl CategorySpec {
    /// Spec with the category's reference action
    pub fn new(category: ReportCategory, weight: f64) -> Self {
        Self {
            category,
            weight,
            action: category.default_action().to_string(),
        }
    }
}

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTables {
    /// One entry per category; weights need not sum to one
    pub categories: Vec<CategorySpec>,
    /// Range the simulated confidence is drawn from
    pub confidence_range: (f64, f64),
    /// Reported model identifier
    pub model: String,
}

impl Default for ReportTables {
    fn default() -> Self {
        Self {
            categories: vec![
                CategorySpec::new(ReportCategory::Pothole, 0.40),
                CategorySpec::new(ReportCategory::Garbage, 0.25),
                CategorySpec::new(ReportCategory::TreeFall, 0.15),
                CategorySpec::new(ReportCategory::Streetlight, 0.12),
                CategorySpec::new(ReportCategory::WaterLeak, 0.08),
            ],
            confidence_range: (0.85, 0.98),
            model: "MobileNetV2-Fine-Tuned".to_string(),
        }
    }
}

impl ReportTables {
    /// Check the table covers every category exactly once with usable weights
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let mut seen = HashSet::new();
        for spec in &self.categories {
            if !seen.insert(spec.category) {
                return Err(ClassifierError::DuplicateCategory(spec.category));
            }
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(ClassifierError::InvalidWeights(format!(
                    "{} has weight {}",
                    spec.category, spec.weight
                )));
            }
        }
        if let Some(missing) = ReportCategory::ALL.iter().find(|c| !seen.contains(*c)) {
            return Err(ClassifierError::MissingCategory(*missing));
        }
        if self.total_weight() <= 0.0 {
            return Err(ClassifierError::InvalidWeights(
                "weights sum to zero".to_string(),
            ));
        }

        let (low, high) = self.confidence_range;
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
            return Err(ClassifierError::InvalidConfidenceRange { low, high });
        }
        Ok(())
    }

    /// Sum of all category weights
    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|s| s.weight).sum()
    }

    /// Normalised probability of a category
    pub fn probability(&self, category: ReportCategory) -> f64 {
        let total = self.total_weight();
        if total <= 0.0 {
            return 0.0;
        }
        self.categories
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.weight)
            .sum::<f64>()
            / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tables = ReportTables::default();
        assert!(tables.validate().is_ok());
        assert!((tables.total_weight() - 1.0).abs() < 1e-12);
        assert!((tables.probability(ReportCategory::Pothole) - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut tables = ReportTables::default();
        tables.categories.push(CategorySpec::new(ReportCategory::Garbage, 0.1));
        assert!(matches!(
            tables.validate(),
            Err(ClassifierError::DuplicateCategory(ReportCategory::Garbage))
        ));
    }

    #[test]
    fn test_rejects_missing() {
        let mut tables = ReportTables::default();
        tables.categories.retain(|s| s.category != ReportCategory::WaterLeak);
        assert!(matches!(
            tables.validate(),
            Err(ClassifierError::MissingCategory(ReportCategory::WaterLeak))
        ));
    }

    #[test]
    fn test_rejects_zero_total() {
        let mut tables = ReportTables::default();
        for spec in &mut tables.categories {
            spec.weight = 0.0;
        }
        assert!(matches!(tables.validate(), Err(ClassifierError::InvalidWeights(_))));
    }

    #[test]
    fn test_rejects_inverted_confidence_range() {
        let tables = ReportTables {
            confidence_range: (0.98, 0.85),
            ..Default::default()
        };
        assert!(matches!(
            tables.validate(),
            Err(ClassifierError::InvalidConfidenceRange { .. })
        ));
    }
}
