//! Risk tiers and health advisories

use city_core::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality risk tier, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Good,
    Moderate,
    UnhealthySensitive,
    High,
}

impl RiskTier {
    /// All tiers in severity order
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Good,
        RiskTier::Moderate,
        RiskTier::UnhealthySensitive,
        RiskTier::High,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Good => "GOOD",
            RiskTier::Moderate => "MODERATE",
            RiskTier::UnhealthySensitive => "UNHEALTHY_SENSITIVE",
            RiskTier::High => "HIGH",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Alert priority for this tier
    pub fn priority(&self) -> Priority {
        match self {
            RiskTier::Good => Priority::Low,
            RiskTier::Moderate => Priority::Medium,
            RiskTier::UnhealthySensitive => Priority::High,
            RiskTier::High => Priority::Critical,
        }
    }

    /// Dashboard advisory shown next to the tier
    ///
    /// Only `High` and `Moderate` raise a warning; `UnhealthySensitive`
    /// is reported as safe, matching the published dashboard.
    pub fn health_advisory(&self) -> (AdvisoryLevel, &'static str) {
        match self {
            RiskTier::High => (
                AdvisoryLevel::Danger,
                "Health Advisory: Sensitive groups should avoid outdoor activities",
            ),
            RiskTier::Moderate => (
                AdvisoryLevel::Caution,
                "Health Advisory: Consider reducing prolonged outdoor exertion",
            ),
            RiskTier::Good | RiskTier::UnhealthySensitive => {
                (AdvisoryLevel::Safe, "Air Quality: Safe for outdoor activities")
            }
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a health advisory banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryLevel {
    Safe,
    Caution,
    Danger,
}
