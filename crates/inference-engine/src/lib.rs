//! CityAssist Inference Engine
//!
//! Builds every predictor once from the configured tables and serves
//! air-quality, outage, report and route predictions through one facade.

mod engine;

pub use engine::{CityEngine, InferenceResult};

use aqi_scorer::AqiError;
use city_config::ConfigError;
use route_selector::RouteError;
use thiserror::Error;

/// Errors surfaced by the engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine construction failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Air quality scoring failed: {0}")]
    Aqi(#[from] AqiError),

    #[error("Route selection failed: {0}")]
    Route(#[from] RouteError),
}
