//! Air Quality Risk Scorer
//!
//! Maps a PM2.5 concentration to a risk tier, an alert priority, an
//! impact probability and a zone-specific explanation.

pub mod config;
pub mod scorer;
pub mod tier;

pub use config::AqiTable;
pub use scorer::{AqiPrediction, AqiScorer};
pub use tier::{AdvisoryLevel, RiskTier};

use input_validator::ValidationError;
use thiserror::Error;

/// AQI scorer error types
#[derive(Debug, Error)]
pub enum AqiError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid impact probabilities: {0}")]
    InvalidProbabilities(String),
}
