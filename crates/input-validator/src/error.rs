//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite reading
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Configured range is unusable
    #[error("{field} range [{min}, {max}] is invalid")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
