//! Outage ETA Estimator Implementation

use crate::config::OutageTables;
use crate::OutageError;
use city_core::{ConfidenceScore, FactorTable, RandomSource, ThreadRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Half-width of the displayed interval, as a fraction of the ETA
const INTERVAL_BAND: f64 = 0.2;

/// Restoration-time prediction for an outage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutagePrediction {
    /// Estimated restoration time (hours), never below the configured minimum
    pub eta_hours: f64,
    /// Higher when the cause is a recognised key
    pub confidence: ConfidenceScore,
    /// Base duration for the cause (hours)
    pub base_time: f64,
    /// Zone complexity contribution (hours), negative for simpler zones
    pub zone_factor: f64,
    /// Weather delay (hours)
    pub weather_factor: f64,
    /// Random perturbation applied before clamping (hours)
    pub jitter: f64,
    /// Tables that fell back to their default value
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
    /// Reported model identifier
    pub model: String,
}

/// Fixed band around an ETA, shown as a 95% interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, hours: f64) -> bool {
        (self.lower..=self.upper).contains(&hours)
    }
}

impl OutagePrediction {
    /// Sum of the deterministic terms, before jitter and clamping
    pub fn deterministic_hours(&self) -> f64 {
        self.base_time + self.zone_factor + self.weather_factor
    }

    /// ±20% band around the ETA
    pub fn interval(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: self.eta_hours * (1.0 - INTERVAL_BAND),
            upper: self.eta_hours * (1.0 + INTERVAL_BAND),
        }
    }

    /// One-line breakdown of the contributing terms
    pub fn breakdown(&self) -> String {
        format!(
            "Base time: {:.1}h, Weather factor: +{:.1}h, Zone complexity: {:+.1}h",
            self.base_time, self.weather_factor, self.zone_factor
        )
    }

    /// Whether any lookup used a default value
    pub fn used_fallback(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Factor-table outage estimator
#[derive(Debug, Clone)]
pub struct OutageEstimator {
    causes: FactorTable,
    zones: FactorTable,
    weather: FactorTable,
    jitter_hours: f64,
    min_eta_hours: f64,
    known_cause_confidence: ConfidenceScore,
    unknown_cause_confidence: ConfidenceScore,
    model: String,
}

impl OutageEstimator {
    /// Create an estimator from validated tables
    pub fn new(tables: OutageTables) -> Result<Self, OutageError> {
        tables.validate()?;
        info!(
            "Creating outage estimator: {} causes, {} zones, {} weather conditions, jitter ±{}h",
            tables.causes.len(),
            tables.zones.len(),
            tables.weather.len(),
            tables.jitter_hours
        );

        Ok(Self::from_tables(tables))
    }

    fn from_tables(tables: OutageTables) -> Self {
        Self {
            causes: FactorTable::from_entries("causes", tables.default_base_hours, &tables.causes),
            zones: FactorTable::from_entries("zones", tables.default_zone_factor, &tables.zones),
            weather: FactorTable::from_entries(
                "weather",
                tables.default_weather_hours,
                &tables.weather,
            ),
            jitter_hours: tables.jitter_hours,
            min_eta_hours: tables.min_eta_hours,
            known_cause_confidence: ConfidenceScore::new(tables.known_cause_confidence),
            unknown_cause_confidence: ConfidenceScore::new(tables.unknown_cause_confidence),
            model: tables.model,
        }
    }

    /// Predict using the calling thread's generator
    pub fn predict(&self, cause: &str, zone: &str, weather: &str) -> OutagePrediction {
        self.predict_with(cause, zone, weather, &mut ThreadRandom)
    }

    /// Predict drawing jitter from `rng`
    pub fn predict_with<R: RandomSource + ?Sized>(
        &self,
        cause: &str,
        zone: &str,
        weather: &str,
        rng: &mut R,
    ) -> OutagePrediction {
        let mut fallbacks = Vec::new();

        let cause_hit = self.causes.get(cause);
        let zone_hit = self.zones.get(zone);
        let weather_hit = self.weather.get(weather);
        for (table, key, fell_back) in [
            (&self.causes, cause, cause_hit.is_fallback()),
            (&self.zones, zone, zone_hit.is_fallback()),
            (&self.weather, weather, weather_hit.is_fallback()),
        ] {
            if fell_back {
                warn!(
                    "Unknown {} key '{}', using default {}",
                    table.name(),
                    key,
                    table.default_value()
                );
                fallbacks.push(table.name().to_string());
            }
        }

        let base_time = cause_hit.value();
        let zone_factor = (zone_hit.value() - 1.0) * base_time;
        let weather_factor = weather_hit.value();
        let jitter = rng.uniform(-self.jitter_hours, self.jitter_hours);

        let eta_hours = (base_time + zone_factor + weather_factor + jitter).max(self.min_eta_hours);
        let confidence = if cause_hit.is_fallback() {
            self.unknown_cause_confidence
        } else {
            self.known_cause_confidence
        };

        debug!(
            "Outage ETA for {}/{}/{}: {:.2}h (base {:.1}, zone {:+.2}, weather {:+.1}, jitter {:+.2})",
            cause, zone, weather, eta_hours, base_time, zone_factor, weather_factor, jitter
        );

        OutagePrediction {
            eta_hours,
            confidence,
            base_time,
            zone_factor,
            weather_factor,
            jitter,
            fallbacks,
            model: self.model.clone(),
        }
    }

    /// Configured jitter bound (hours)
    pub fn jitter_bound(&self) -> f64 {
        self.jitter_hours
    }

    /// Whether the cause has a configured base time
    pub fn recognizes_cause(&self, cause: &str) -> bool {
        self.causes.contains(cause)
    }
}

impl Default for OutageEstimator {
    fn default() -> Self {
        Self::from_tables(OutageTables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_core::{FixedRandom, StdRandom};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_maintenance_in_suburbs() {
        let estimator = OutageEstimator::default();
        let p = estimator.predict_with("Maintenance", "Zone-D", "Clear", &mut FixedRandom::midpoint());

        assert_eq!(p.base_time, 2.5);
        assert!((p.zone_factor - (-0.5)).abs() < EPS);
        assert_eq!(p.weather_factor, 0.0);
        assert!(p.jitter.abs() < EPS);
        assert!((p.eta_hours - 2.0).abs() < EPS);
        assert_eq!(p.confidence.value(), 0.85);
        assert!(!p.used_fallback());
    }

    #[test]
    fn test_jitter_extremes() {
        let estimator = OutageEstimator::default();
        let low = estimator.predict_with("Weather", "Zone-B", "Storm", &mut FixedRandom::new(0.0, 0));
        let high = estimator.predict_with("Weather", "Zone-B", "Storm", &mut FixedRandom::new(1.0, 0));

        // 6.0 + 0.5 * 6.0 + 1.5 = 10.5
        assert!((low.eta_hours - 10.0).abs() < EPS);
        assert!((high.eta_hours - 11.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let estimator = OutageEstimator::default();
        let p = estimator.predict_with("Squirrel", "Zone-Q", "Hail", &mut FixedRandom::midpoint());

        assert_eq!(p.base_time, 4.0);
        assert_eq!(p.zone_factor, 0.0);
        assert_eq!(p.weather_factor, 0.0);
        assert_eq!(p.confidence.value(), 0.70);
        assert_eq!(p.fallbacks, vec!["causes", "zones", "weather"]);
    }

    #[test]
    fn test_minimum_clamp() {
        let tables = OutageTables {
            causes: vec![city_core::NamedFactor::new("Reset", 0.2)],
            ..OutageTables::deterministic()
        };
        let estimator = OutageEstimator::new(tables).unwrap();
        let p = estimator.predict("Reset", "Zone-C", "Clear");
        assert_eq!(p.eta_hours, 0.5);
        assert_eq!(p.deterministic_hours(), 0.2);
    }

    #[test]
    fn test_interval_and_breakdown() {
        let estimator = OutageEstimator::new(OutageTables::deterministic()).unwrap();
        let p = estimator.predict("Overload", "Zone-C", "Rain");
        assert!((p.eta_hours - 3.5).abs() < EPS);

        let interval = p.interval();
        assert!((interval.lower - 2.8).abs() < EPS);
        assert!((interval.upper - 4.2).abs() < EPS);
        assert!(interval.contains(p.eta_hours));
        assert_eq!(
            p.breakdown(),
            "Base time: 3.0h, Weather factor: +0.5h, Zone complexity: +0.0h"
        );
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let estimator = OutageEstimator::default();
        let a = estimator.predict_with("Weather", "Zone-A", "Snow", &mut StdRandom::seeded(42));
        let b = estimator.predict_with("Weather", "Zone-A", "Snow", &mut StdRandom::seeded(42));
        assert_eq!(a, b);
    }

    fn inputs() -> impl Strategy<Value = (String, String, String)> {
        let cause = prop::sample::select(vec![
            "Equipment Failure", "Weather", "Overload", "Maintenance", "Unknown",
        ]);
        let zone = prop::sample::select(vec!["Zone-A", "Zone-B", "Zone-C", "Zone-D", "Zone-Z"]);
        let weather = prop::sample::select(vec!["Clear", "Rain", "Storm", "Snow", "Fog"]);
        (cause, zone, weather).prop_map(|(c, z, w)| (c.to_string(), z.to_string(), w.to_string()))
    }

    proptest! {
        #[test]
        fn eta_is_bounded((cause, zone, weather) in inputs(), seed in any::<u64>()) {
            let estimator = OutageEstimator::default();
            let p = estimator.predict_with(&cause, &zone, &weather, &mut StdRandom::seeded(seed));
            let bound = estimator.jitter_bound();

            prop_assert!(p.eta_hours >= 0.5);
            prop_assert!(p.eta_hours - bound <= p.deterministic_hours() + EPS);
            prop_assert!(p.deterministic_hours() <= p.eta_hours + bound + EPS);
        }

        #[test]
        fn confidence_depends_only_on_cause((cause, zone, weather) in inputs()) {
            let estimator = OutageEstimator::default();
            let p = estimator.predict(&cause, &zone, &weather);
            let expected = if estimator.recognizes_cause(&cause) { 0.85 } else { 0.70 };
            prop_assert_eq!(p.confidence.value(), expected);
        }
    }
}
