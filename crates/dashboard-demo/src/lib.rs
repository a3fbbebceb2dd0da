//! CityAssist Dashboard Demo
//!
//! Feeds seeded synthetic city data through the inference engine and
//! collects what a dashboard would display: per-zone air quality with
//! its advisory, outage ETAs with intervals, classified reports and
//! traffic-adjusted routes.

pub mod synthetic;

use anyhow::{ensure, Context, Result};
use aqi_scorer::{AdvisoryLevel, AqiPrediction};
use chrono::{DateTime, Utc};
use city_config::CityTables;
use city_core::StdRandom;
use inference_engine::CityEngine;
use outage_estimator::{ConfidenceInterval, OutagePrediction};
use rand::rngs::StdRng;
use rand::SeedableRng;
use report_classifier::ReportClassification;
use route_selector::RouteCandidate;
use serde::Serialize;
use synthetic::{OutageIncident, ZONES};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Route queries shown on the dashboard: morning rush, midday, and a
/// pair with no configured route
const ROUTE_QUERIES: [(&str, &str, u8); 3] = [
    ("Downtown", "Airport", 8),
    ("Downtown", "Airport", 13),
    ("Downtown Station", "Airport", 9),
];

/// Initialize logging to stderr
pub fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Knobs for one demo run
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Seeds both the synthetic data and the engine; `None` draws from entropy
    pub seed: Option<u64>,
    /// Days of hourly air quality history per zone, at least one
    pub days: u32,
    pub outages: usize,
    pub reports: usize,
    /// End of the synthetic history
    pub now: DateTime<Utc>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            seed: None,
            days: 7,
            outages: 5,
            reports: 3,
            now: Utc::now(),
        }
    }
}

/// Air quality panel for one zone
#[derive(Debug, Clone, Serialize)]
pub struct ZoneAirQuality {
    pub zone: String,
    pub description: String,
    pub latest_pm25: f64,
    pub peak_pm25: f64,
    pub prediction: AqiPrediction,
    pub advisory_level: AdvisoryLevel,
    pub advisory: String,
}

/// Outage row with its ETA
#[derive(Debug, Clone, Serialize)]
pub struct OutageEstimate {
    pub incident: OutageIncident,
    pub prediction: OutagePrediction,
    pub interval: ConfidenceInterval,
    pub breakdown: String,
}

/// Route lookup for one origin, destination and hour
#[derive(Debug, Clone, Serialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub hour: u8,
    pub recommended: Option<RouteCandidate>,
    pub alternatives: Vec<RouteCandidate>,
}

/// Everything one demo run produced
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub air_quality: Vec<ZoneAirQuality>,
    pub outages: Vec<OutageEstimate>,
    pub reports: Vec<ReportClassification>,
    pub routes: Vec<RouteQuery>,
    /// Outage estimates that fell back to a table default
    pub fallback_count: usize,
}

/// Run every predictor over freshly generated synthetic data
pub fn run_demo(tables: &CityTables, options: &DemoOptions) -> Result<DemoReport> {
    ensure!(options.days > 0, "at least one day of air quality history is required");

    let (mut data_rng, engine_rng) = match options.seed {
        Some(seed) => (StdRng::seed_from_u64(seed), StdRandom::seeded(seed)),
        None => (StdRng::from_entropy(), StdRandom::from_entropy()),
    };
    let mut engine = CityEngine::with_random(tables, engine_rng)?;
    info!(
        "Running demo: {} zones, {} outages, {} reports",
        ZONES.len(),
        options.outages,
        options.reports
    );

    let mut air_quality = Vec::with_capacity(ZONES.len());
    for (zone, description) in ZONES {
        let series = synthetic::aqi_series(zone, options.days, options.now, &mut data_rng)?;
        let latest = series
            .last()
            .with_context(|| format!("no air quality readings for {zone}"))?;
        let peak_pm25 = series.iter().map(|r| r.pm25).fold(f64::MIN, f64::max);
        let prediction = engine.score_air_quality(latest.pm25, zone)?.prediction;
        let (advisory_level, advisory) = prediction.risk_tier.health_advisory();
        debug!("{}: PM2.5 {:.1} -> {}", zone, latest.pm25, prediction.risk_tier);

        air_quality.push(ZoneAirQuality {
            zone: zone.to_string(),
            description: description.to_string(),
            latest_pm25: latest.pm25,
            peak_pm25,
            prediction,
            advisory_level,
            advisory: advisory.to_string(),
        });
    }

    let mut fallback_count = 0;
    let outages = synthetic::outage_incidents(options.outages, options.now, &mut data_rng)?
        .into_iter()
        .map(|incident| {
            let result = engine.estimate_outage(&incident.cause, &incident.zone, &incident.weather);
            if result.used_fallback {
                fallback_count += 1;
            }
            OutageEstimate {
                interval: result.prediction.interval(),
                breakdown: result.prediction.breakdown(),
                prediction: result.prediction,
                incident,
            }
        })
        .collect();

    let reports = (0..options.reports)
        .map(|_| engine.classify_report().prediction)
        .collect();

    let mut routes = Vec::with_capacity(ROUTE_QUERIES.len());
    for (origin, destination, hour) in ROUTE_QUERIES {
        let recommended = engine.best_route(origin, destination, hour)?.prediction;
        let alternatives = engine.routes().candidates(origin, destination, hour)?;
        routes.push(RouteQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            hour,
            recommended,
            alternatives,
        });
    }

    info!("Demo complete: {} outage fallbacks", fallback_count);
    Ok(DemoReport {
        generated_at: options.now,
        seed: options.seed,
        air_quality,
        outages,
        reports,
        routes,
        fallback_count,
    })
}
