//! AQI Scorer Implementation

use crate::config::AqiTable;
use crate::tier::RiskTier;
use crate::AqiError;
use city_core::Priority;
use input_validator::Validator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Health-risk prediction for a concentration reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiPrediction {
    /// Risk tier of the reading
    pub risk_tier: RiskTier,
    /// Alert priority derived from the tier
    pub priority: Priority,
    /// Probability of health impact (0.0 to 1.0)
    pub impact_probability: f64,
    /// Human-readable justification mentioning the zone
    pub explanation: String,
    /// Concentration that was scored (µg/m³)
    pub pm25: f64,
    /// Reported model identifier
    pub model: String,
}

/// Threshold-based air quality scorer
#[derive(Debug, Clone, Default)]
pub struct AqiScorer {
    table: AqiTable,
    validator: Validator,
}

impl AqiScorer {
    /// Create a scorer from a validated band table
    pub fn new(table: AqiTable) -> Result<Self, AqiError> {
        Self::with_validator(table, Validator::default())
    }

    /// Create a scorer that checks readings against `validator`'s ranges
    pub fn with_validator(table: AqiTable, validator: Validator) -> Result<Self, AqiError> {
        table.validate()?;
        info!(
            "Creating AQI scorer with thresholds {:?}, accepted range {:?} ({})",
            table.thresholds,
            validator.config().concentration_range,
            table.model
        );
        Ok(Self { table, validator })
    }

    /// Tier for a concentration: the first threshold not exceeded wins,
    /// anything above the last threshold is the most severe tier
    pub fn tier_for(&self, concentration: f64) -> RiskTier {
        self.table
            .thresholds
            .iter()
            .position(|&upper| concentration <= upper)
            .map(|i| RiskTier::ALL[i])
            .unwrap_or(RiskTier::High)
    }

    /// Score a concentration for a zone
    ///
    /// Any zone string is accepted and interpolated verbatim.
    pub fn predict(&self, concentration: f64, zone: &str) -> Result<AqiPrediction, AqiError> {
        self.validator.validate_concentration(concentration)?;

        let risk_tier = self.tier_for(concentration);
        debug!("PM2.5 {:.1} in {} scored as {}", concentration, zone, risk_tier);

        Ok(AqiPrediction {
            risk_tier,
            priority: risk_tier.priority(),
            impact_probability: self.table.impact_probabilities[risk_tier.index()],
            explanation: self.table.explanation(risk_tier, zone),
            pm25: concentration,
            model: self.table.model.clone(),
        })
    }

    /// Band table in use
    pub fn table(&self) -> &AqiTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_validator::{ValidationConfig, ValidationError};
    use proptest::prelude::*;

    #[test]
    fn test_good_air() {
        let scorer = AqiScorer::default();
        let p = scorer.predict(40.0, "Zone-D").unwrap();
        assert_eq!(p.risk_tier, RiskTier::Good);
        assert_eq!(p.priority, Priority::Low);
        assert_eq!(p.impact_probability, 0.15);
        assert!(p.explanation.contains("Zone-D"));
        assert_eq!(p.pm25, 40.0);
        assert_eq!(p.model, "XGBoost-Classifier-v1.2");
    }

    #[test]
    fn test_dangerous_air() {
        let scorer = AqiScorer::default();
        let p = scorer.predict(250.0, "Zone-B").unwrap();
        assert_eq!(p.risk_tier, RiskTier::High);
        assert_eq!(p.priority, Priority::Critical);
        assert_eq!(p.impact_probability, 0.90);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let scorer = AqiScorer::default();
        assert_eq!(scorer.tier_for(50.0), RiskTier::Good);
        assert_eq!(scorer.tier_for(50.01), RiskTier::Moderate);
        assert_eq!(scorer.tier_for(100.0), RiskTier::Moderate);
        assert_eq!(scorer.tier_for(150.0), RiskTier::UnhealthySensitive);
        assert_eq!(scorer.tier_for(150.5), RiskTier::High);
        assert_eq!(scorer.tier_for(200.0), RiskTier::High);
        assert_eq!(scorer.tier_for(0.0), RiskTier::Good);
    }

    #[test]
    fn test_unknown_zone_is_interpolated() {
        let p = AqiScorer::default().predict(120.0, "Harbourfront").unwrap();
        assert_eq!(p.risk_tier, RiskTier::UnhealthySensitive);
        assert!(p.explanation.ends_with("in Harbourfront."));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let scorer = AqiScorer::default();
        assert!(matches!(
            scorer.predict(-3.0, "Zone-A"),
            Err(AqiError::InvalidInput(_))
        ));
        assert!(scorer.predict(f64::NAN, "Zone-A").is_err());
    }

    #[test]
    fn test_probability_strictly_increasing() {
        let scorer = AqiScorer::default();
        let probs: Vec<f64> = [10.0, 75.0, 125.0, 500.0]
            .iter()
            .map(|&c| scorer.predict(c, "Zone-C").unwrap().impact_probability)
            .collect();
        assert!(probs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_new_rejects_invalid_table() {
        let table = AqiTable {
            thresholds: [0.0, 0.0, 0.0, 0.0],
            ..Default::default()
        };
        assert!(AqiScorer::new(table).is_err());
    }

    #[test]
    fn test_custom_concentration_range() {
        let validator = Validator::new(ValidationConfig {
            concentration_range: (0.0, 1000.0),
            ..Default::default()
        });
        let scorer = AqiScorer::with_validator(AqiTable::default(), validator).unwrap();

        assert_eq!(scorer.predict(1000.0, "Zone-B").unwrap().risk_tier, RiskTier::High);
        assert!(matches!(
            scorer.predict(1500.0, "Zone-B"),
            Err(AqiError::InvalidInput(ValidationError::OutOfRange { .. }))
        ));
    }

    proptest! {
        #[test]
        fn tier_is_monotonic(a in 0.0f64..1000.0, b in 0.0f64..1000.0) {
            let scorer = AqiScorer::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scorer.tier_for(lo) <= scorer.tier_for(hi));
        }

        #[test]
        fn priority_follows_tier(c in 0.0f64..1000.0) {
            let p = AqiScorer::default().predict(c, "Zone-A").unwrap();
            prop_assert_eq!(p.priority, p.risk_tier.priority());
        }
    }
}
