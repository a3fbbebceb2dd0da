//! AQI band configuration

use crate::tier::RiskTier;
use crate::AqiError;
use serde::{Deserialize, Serialize};

/// Band thresholds, impact probabilities and explanation templates
///
/// Arrays are indexed by `RiskTier::index()`. Templates substitute
/// `{zone}` with the caller's zone name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AqiTable {
    /// Inclusive upper bound of each tier (µg/m³), ascending
    pub thresholds: [f64; 4],

    /// Probability of health impact per tier, strictly increasing
    pub impact_probabilities: [f64; 4],

    /// Explanation templates per tier
    pub explanations: [String; 4],

    /// Reported model identifier
    pub model: String,
}

impl Default for AqiTable {
    fn default() -> Self {
        Self {
            thresholds: [50.0, 100.0, 150.0, 200.0],
            impact_probabilities: [0.15, 0.45, 0.70, 0.90],
            explanations: [
                "PM2.5 levels are within safe range. Air quality is satisfactory for {zone}."
                    .to_string(),
                "PM2.5 levels moderately elevated. Sensitive groups should consider limiting prolonged outdoor exertion in {zone}."
                    .to_string(),
                "PM2.5 levels unhealthy for sensitive groups. Children, elderly, and people with respiratory conditions should reduce outdoor activities in {zone}."
                    .to_string(),
                "PM2.5 levels dangerously high. All residents in {zone} should avoid outdoor activities and use air purifiers indoors."
                    .to_string(),
            ],
            model: "XGBoost-Classifier-v1.2".to_string(),
        }
    }
}

impl AqiTable {
    /// Check thresholds ascend and probabilities increase
    pub fn validate(&self) -> Result<(), AqiError> {
        if self.thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(AqiError::InvalidThresholds(format!(
                "thresholds must be finite and non-negative: {:?}",
                self.thresholds
            )));
        }
        if self.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AqiError::InvalidThresholds(format!(
                "thresholds must be strictly ascending: {:?}",
                self.thresholds
            )));
        }
        if self
            .impact_probabilities
            .iter()
            .any(|p| !(0.0..=1.0).contains(p))
        {
            return Err(AqiError::InvalidProbabilities(format!(
                "probabilities must lie in [0, 1]: {:?}",
                self.impact_probabilities
            )));
        }
        if self.impact_probabilities.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AqiError::InvalidProbabilities(format!(
                "probabilities must increase with severity: {:?}",
                self.impact_probabilities
            )));
        }
        Ok(())
    }

    /// Explanation for a tier with the zone substituted
    pub fn explanation(&self, tier: RiskTier, zone: &str) -> String {
        self.explanations[tier.index()].replace("{zone}", zone)
    }
}
