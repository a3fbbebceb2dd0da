//! CityAssist Configuration
//!
//! All lookup tables the predictors use, loaded once from an optional
//! TOML file plus `CITYASSIST_*` environment overrides, and validated
//! before any predictor is built.

mod tables;

pub use tables::{CityTables, ENV_PREFIX};

use aqi_scorer::AqiError;
use input_validator::ValidationError;
use outage_estimator::OutageError;
use report_classifier::ClassifierError;
use route_selector::RouteError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("AQI table: {0}")]
    Aqi(#[from] AqiError),

    #[error("Outage tables: {0}")]
    Outage(#[from] OutageError),

    #[error("Report tables: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Route table: {0}")]
    Route(#[from] RouteError),

    #[error("Validation ranges: {0}")]
    Validation(#[from] ValidationError),
}
