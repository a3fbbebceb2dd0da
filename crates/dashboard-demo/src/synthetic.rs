//! Seeded synthetic city data
//!
//! Stand-ins for the sensor feeds the dashboard would read: an hourly
//! PM2.5 series per zone and a list of reported outages.

use anyhow::Result;
use chrono::{DateTime, Duration, Timelike, Utc};
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// City zones and their descriptions
pub const ZONES: [(&str, &str); 4] = [
    ("Zone-A", "Downtown"),
    ("Zone-B", "Industrial"),
    ("Zone-C", "Residential"),
    ("Zone-D", "Suburban"),
];

const OUTAGE_CAUSES: [&str; 5] = ["Equipment Failure", "Weather", "Overload", "Maintenance", "Unknown"];
const OUTAGE_CAUSE_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];
const WEATHER: [&str; 4] = ["Clear", "Rain", "Storm", "Snow"];

/// One hourly air quality sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    pub timestamp: DateTime<Utc>,
    pub zone: String,
    pub hour: u32,
    /// µg/m³
    pub pm25: f64,
    /// µg/m³
    pub pm10: f64,
}

/// A reported utility outage awaiting an ETA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutageIncident {
    pub outage_id: String,
    pub zone: String,
    pub cause: String,
    pub weather: String,
    pub reported_at: DateTime<Utc>,
    pub affected_customers: u32,
}

/// Typical PM2.5 level for a zone
fn zone_base_level(zone: &str) -> f64 {
    match zone {
        "Zone-A" => 80.0,
        "Zone-B" => 120.0,
        "Zone-C" => 50.0,
        "Zone-D" => 30.0,
        _ => 70.0,
    }
}

/// Hourly readings for the `days` days before `end`, oldest first
///
/// PM2.5 follows a daily sine around the zone's base level with
/// Gaussian noise, floored at 10; PM10 tracks 1.5x PM2.5, floored at 15.
pub fn aqi_series(
    zone: &str,
    days: u32,
    end: DateTime<Utc>,
    rng: &mut StdRng,
) -> Result<Vec<AqiReading>> {
    let hours = i64::from(days) * 24;
    let pm25_noise = Normal::new(0.0, 10.0)?;
    let pm10_noise = Normal::new(0.0, 5.0)?;
    let base = zone_base_level(zone);

    let readings = (0..hours)
        .map(|i| {
            let timestamp = end - Duration::hours(hours - i);
            let hour = timestamp.hour();
            let daily = 20.0 * (2.0 * std::f64::consts::PI * f64::from(hour) / 24.0).sin();
            let pm25 = (base + daily + pm25_noise.sample(rng)).max(10.0);
            let pm10 = (pm25 * 1.5 + pm10_noise.sample(rng)).max(15.0);
            AqiReading {
                timestamp,
                zone: zone.to_string(),
                hour,
                pm25,
                pm10,
            }
        })
        .collect();
    Ok(readings)
}

/// `count` outages reported during the two days before `now`
pub fn outage_incidents(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
) -> Result<Vec<OutageIncident>> {
    let causes = WeightedIndex::new(OUTAGE_CAUSE_WEIGHTS)?;

    let incidents = (0..count)
        .map(|i| {
            let zone = ZONES.choose(rng).map_or("Zone-C", |(z, _)| *z);
            let weather = WEATHER.choose(rng).copied().unwrap_or("Clear");
            OutageIncident {
                outage_id: format!("OUT-{}", 1000 + i),
                zone: zone.to_string(),
                cause: OUTAGE_CAUSES[causes.sample(rng)].to_string(),
                weather: weather.to_string(),
                reported_at: now - Duration::hours(rng.gen_range(1..48)),
                affected_customers: rng.gen_range(100..5000),
            }
        })
        .collect();
    Ok(incidents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_series_shape_and_floors() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = aqi_series("Zone-B", 7, Utc::now(), &mut rng).unwrap();

        assert_eq!(series.len(), 7 * 24);
        assert!(series.iter().all(|r| r.pm25 >= 10.0 && r.pm10 >= 15.0));
        assert!(series.iter().all(|r| r.zone == "Zone-B" && r.hour < 24));
        assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_series_levels_follow_zone() {
        let mut rng = StdRng::seed_from_u64(42);
        let mean = |zone: &str, rng: &mut StdRng| {
            let s = aqi_series(zone, 7, Utc::now(), rng).unwrap();
            s.iter().map(|r| r.pm25).sum::<f64>() / s.len() as f64
        };
        let industrial = mean("Zone-B", &mut rng);
        let suburban = mean("Zone-D", &mut rng);
        assert!(industrial > suburban + 50.0);
    }

    #[test]
    fn test_same_seed_same_values() {
        let end = Utc::now();
        let a = aqi_series("Zone-A", 1, end, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = aqi_series("Zone-A", 1, end, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_incidents() {
        let mut rng = StdRng::seed_from_u64(42);
        let incidents = outage_incidents(15, Utc::now(), &mut rng).unwrap();

        assert_eq!(incidents.len(), 15);
        assert_eq!(incidents[0].outage_id, "OUT-1000");
        assert_eq!(incidents[14].outage_id, "OUT-1014");
        for incident in &incidents {
            assert!(OUTAGE_CAUSES.contains(&incident.cause.as_str()));
            assert!(WEATHER.contains(&incident.weather.as_str()));
            assert!((100..5000).contains(&incident.affected_customers));
        }
    }
}
