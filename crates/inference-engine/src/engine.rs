//! Inference Engine Implementation

use crate::EngineError;
use aqi_scorer::{AqiPrediction, AqiScorer};
use city_config::{CityTables, ConfigError};
use city_core::{RandomSource, ThreadRandom};
use input_validator::Validator;
use outage_estimator::{OutageEstimator, OutagePrediction};
use report_classifier::{ReportClassification, ReportClassifier};
use route_selector::{RouteCandidate, RouteSelector};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// Result of an inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult<T> {
    /// The prediction
    pub prediction: T,
    /// Time spent in the predictor (microseconds)
    pub latency_us: u64,
    /// Whether a table default replaced an unknown key
    pub used_fallback: bool,
}

/// Facade over the four predictors
///
/// Tables are read once at construction. `R` supplies outage jitter and
/// report sampling; the default draws from a per-thread generator.
pub struct CityEngine<R = ThreadRandom> {
    aqi: AqiScorer,
    outage: OutageEstimator,
    classifier: ReportClassifier,
    routes: RouteSelector,
    rng: R,
}

impl CityEngine<ThreadRandom> {
    /// Create an engine drawing from the thread-local generator
    pub fn new(tables: &CityTables) -> Result<Self, EngineError> {
        Self::with_random(tables, ThreadRandom)
    }

    /// Engine over the reference tables
    pub fn reference() -> Result<Self, EngineError> {
        Self::new(&CityTables::default())
    }
}

impl<R: RandomSource> CityEngine<R> {
    /// Create an engine with an explicit random source
    pub fn with_random(tables: &CityTables, rng: R) -> Result<Self, EngineError> {
        info!("Creating CityAssist inference engine");

        tables.validation.validate().map_err(ConfigError::from)?;
        let validator = Validator::new(tables.validation.clone());

        let engine = Self {
            aqi: AqiScorer::with_validator(tables.aqi.clone(), validator.clone())
                .map_err(ConfigError::from)?,
            outage: OutageEstimator::new(tables.outage.clone()).map_err(ConfigError::from)?,
            classifier: ReportClassifier::new(tables.reports.clone()).map_err(ConfigError::from)?,
            routes: RouteSelector::with_validator(tables.routes.clone(), validator)
                .map_err(ConfigError::from)?,
            rng,
        };

        info!("Inference engine ready");
        Ok(engine)
    }

    /// Score a PM2.5 reading for a zone
    pub fn score_air_quality(
        &self,
        concentration: f64,
        zone: &str,
    ) -> Result<InferenceResult<AqiPrediction>, EngineError> {
        let start = Instant::now();
        let prediction = self.aqi.predict(concentration, zone)?;
        Ok(finish("aqi", prediction, start, false))
    }

    /// Estimate outage restoration time
    pub fn estimate_outage(
        &mut self,
        cause: &str,
        zone: &str,
        weather: &str,
    ) -> InferenceResult<OutagePrediction> {
        let start = Instant::now();
        let prediction = self.outage.predict_with(cause, zone, weather, &mut self.rng);
        if prediction.used_fallback() {
            metrics::counter!("cityassist_fallback_total", "domain" => "outage")
                .increment(prediction.fallbacks.len() as u64);
        }
        let used_fallback = prediction.used_fallback();
        finish("outage", prediction, start, used_fallback)
    }

    /// Classify a civic report
    pub fn classify_report(&mut self) -> InferenceResult<ReportClassification> {
        let start = Instant::now();
        let prediction = self.classifier.classify_with(&mut self.rng);
        finish("report", prediction, start, false)
    }

    /// First configured route for a pair, traffic-adjusted for the hour
    pub fn best_route(
        &self,
        origin: &str,
        destination: &str,
        hour: u8,
    ) -> Result<InferenceResult<Option<RouteCandidate>>, EngineError> {
        let start = Instant::now();
        let prediction = self.routes.best_route(origin, destination, hour)?;
        Ok(finish("route", prediction, start, false))
    }

    /// Air quality scorer
    pub fn aqi(&self) -> &AqiScorer {
        &self.aqi
    }

    /// Outage estimator
    pub fn outage(&self) -> &OutageEstimator {
        &self.outage
    }

    /// Report classifier
    pub fn classifier(&self) -> &ReportClassifier {
        &self.classifier
    }

    /// Route selector
    pub fn routes(&self) -> &RouteSelector {
        &self.routes
    }
}

fn finish<T>(domain: &'static str, prediction: T, start: Instant, used_fallback: bool) -> InferenceResult<T> {
    let latency_us = start.elapsed().as_micros() as u64;
    metrics::counter!("cityassist_predictions_total", "domain" => domain).increment(1);
    debug!("{} inference completed in {}us", domain, latency_us);

    InferenceResult {
        prediction,
        latency_us,
        used_fallback,
    }
}
