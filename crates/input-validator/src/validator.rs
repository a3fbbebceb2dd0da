//! Validator for Range Checking

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// PM2.5 concentration valid range (µg/m³)
    pub concentration_range: (f64, f64),
    /// Hour of day valid range
    pub hour_range: (u8, u8),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            concentration_range: (0.0, f64::MAX),
            hour_range: (0, 23),
        }
    }
}

impl ValidationConfig {
    /// Check every range is ordered and has finite bounds
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = self.concentration_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ValidationError::InvalidBounds {
                field: "concentration",
                min,
                max,
            });
        }
        let (min, max) = self.hour_range;
        if min > max || max > 23 {
            return Err(ValidationError::InvalidBounds {
                field: "hour_of_day",
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        Ok(())
    }
}

/// Validator for predictor inputs
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Ranges in use
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            debug!("{} rejected: not finite", field);
            return Err(ValidationError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            debug!("{} rejected: {} outside [{}, {}]", field, value, range.0, range.1);
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a pollutant concentration
    pub fn validate_concentration(&self, concentration: f64) -> Result<(), ValidationError> {
        self.validate_range("concentration", concentration, self.config.concentration_range)
    }

    /// Validate an hour of day
    pub fn validate_hour(&self, hour: u8) -> Result<(), ValidationError> {
        let (min, max) = self.config.hour_range;
        self.validate_range("hour_of_day", f64::from(hour), (f64::from(min), f64::from(max)))
    }
}
