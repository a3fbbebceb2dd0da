//! Civic Report Classifier
//!
//! Simulates an image classifier: draws a report category from a fixed
//! distribution and derives priority and recommended action from it.

mod category;
mod classifier;
mod config;

pub use category::ReportCategory;
pub use classifier::{ReportClassification, ReportClassifier};
pub use config::{CategorySpec, ReportTables};

use thiserror::Error;

/// Classifier error types
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Invalid category weights: {0}")]
    InvalidWeights(String),

    #[error("Category {0} is configured more than once")]
    DuplicateCategory(ReportCategory),

    #[error("Category {0} is not configured")]
    MissingCategory(ReportCategory),

    #[error("Invalid confidence range [{low}, {high}]")]
    InvalidConfidenceRange { low: f64, high: f64 },
}
