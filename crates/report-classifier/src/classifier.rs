//! Simulated Classifier Implementation

use crate::category::ReportCategory;
use crate::config::ReportTables;
use crate::ClassifierError;
use city_core::{ConfidenceScore, Priority, RandomSource, ThreadRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Classification of a civic report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportClassification {
    pub category: ReportCategory,
    pub confidence: ConfidenceScore,
    pub priority: Priority,
    pub recommended_action: String,
    /// Reported model identifier
    pub model: String,
}

/// Classifier that samples categories instead of reading image data
#[derive(Debug, Clone)]
pub struct ReportClassifier {
    categories: Vec<ReportCategory>,
    weights: Vec<f64>,
    actions: Vec<String>,
    confidence_range: (f64, f64),
    model: String,
}

impl ReportClassifier {
    /// Create a classifier from a validated table
    pub fn new(tables: ReportTables) -> Result<Self, ClassifierError> {
        tables.validate()?;
        info!(
            "Creating report classifier: {} categories, confidence {:?} ({})",
            tables.categories.len(),
            tables.confidence_range,
            tables.model
        );
        Ok(Self::from_tables(tables))
    }

    fn from_tables(tables: ReportTables) -> Self {
        let mut categories = Vec::with_capacity(tables.categories.len());
        let mut weights = Vec::with_capacity(tables.categories.len());
        let mut actions = Vec::with_capacity(tables.categories.len());
        for spec in tables.categories {
            categories.push(spec.category);
            weights.push(spec.weight);
            actions.push(spec.action);
        }
        Self {
            categories,
            weights,
            actions,
            confidence_range: tables.confidence_range,
            model: tables.model,
        }
    }

    /// Classify using the calling thread's generator
    pub fn classify(&self) -> ReportClassification {
        self.classify_with(&mut ThreadRandom)
    }

    /// Classify drawing category and confidence from `rng`
    pub fn classify_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ReportClassification {
        let index = rng.weighted_index(&self.weights);
        let category = self.categories[index];
        let (low, high) = self.confidence_range;
        let confidence = ConfidenceScore::new(rng.uniform(low, high));

        debug!("Report classified as {} ({})", category, confidence);

        ReportClassification {
            category,
            confidence,
            priority: category.priority(),
            recommended_action: self.actions[index].clone(),
            model: self.model.clone(),
        }
    }

    /// Recommended action configured for a category
    pub fn action_for(&self, category: ReportCategory) -> Option<&str> {
        self.categories
            .iter()
            .position(|&c| c == category)
            .map(|i| self.actions[i].as_str())
    }
}

impl Default for ReportClassifier {
    fn default() -> Self {
        Self::from_tables(ReportTables::default())
    }
}
