//! Input Validation
//!
//! Rejects gross input errors (negative or non-finite readings, hours
//! outside a day) before they reach a predictor.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, Validator};
