//! Confidence score clamped to [0, 1]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence score (0.0 to 1.0)
///
/// Every constructor clamps, so a score read back from a prediction is
/// always inside the unit interval. NaN collapses to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// Create a score, clamping into [0, 1]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value as a percentage (0 to 100)
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl From<f64> for ConfidenceScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ConfidenceScore> for f64 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}
