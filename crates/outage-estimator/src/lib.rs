//! Outage Restoration Estimator
//!
//! Combines a cause's base duration, a zone complexity factor and an
//! additive weather delay, plus bounded jitter, into a restoration ETA.

mod config;
mod estimator;

pub use config::OutageTables;
pub use estimator::{ConfidenceInterval, OutageEstimator, OutagePrediction};

use thiserror::Error;

/// Outage estimator error types
#[derive(Debug, Error)]
pub enum OutageError {
    #[error("Invalid factor {value} for '{key}' in {table} table")]
    InvalidFactor {
        table: &'static str,
        key: String,
        value: f64,
    },

    #[error("Invalid jitter bound: {0} hours")]
    InvalidJitter(f64),

    #[error("Invalid minimum ETA: {0} hours")]
    InvalidMinimum(f64),

    #[error("Invalid confidence {0}: must lie in [0, 1]")]
    InvalidConfidence(f64),
}
