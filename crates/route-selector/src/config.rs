//! Route database and traffic windows

use crate::RouteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A configured route between two places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub description: String,
    /// Free-flow travel time (minutes)
    pub base_time_minutes: f64,
    pub distance_km: f64,
}

impl RouteSpec {
    pub fn new(description: impl Into<String>, base_time_minutes: f64, distance_km: f64) -> Self {
        Self {
            description: description.into(),
            base_time_minutes,
            distance_km,
        }
    }
}

/// Candidate routes for one origin/destination pair, in preference order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub origin: String,
    pub destination: String,
    pub candidates: Vec<RouteSpec>,
}

/// Inclusive range of rush hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TrafficWindow {
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: u8) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Route selector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    pub routes: Vec<RouteEntry>,
    pub rush_windows: Vec<TrafficWindow>,
    pub rush_multiplier: f64,
    pub off_peak_multiplier: f64,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![RouteEntry {
                origin: "Downtown".to_string(),
                destination: "Airport".to_string(),
                candidates: vec![
                    RouteSpec::new("Main St → Highway 101 → Airport Rd", 32.0, 25.0),
                    RouteSpec::new("Broadway → Ring Road → Airport Rd", 38.0, 28.0),
                    RouteSpec::new("Downtown Direct", 35.0, 22.0),
                ],
            }],
            rush_windows: vec![TrafficWindow::new(7, 9), TrafficWindow::new(17, 19)],
            rush_multiplier: 1.4,
            off_peak_multiplier: 1.1,
        }
    }
}

impl RouteTable {
    /// Check routes are unique and positive, windows sit inside a day
    pub fn validate(&self) -> Result<(), RouteError> {
        let mut pairs = HashSet::new();
        for entry in &self.routes {
            let invalid = |reason: String| RouteError::InvalidRoute {
                origin: entry.origin.clone(),
                destination: entry.destination.clone(),
                reason,
            };

            if !pairs.insert((entry.origin.as_str(), entry.destination.as_str())) {
                return Err(invalid("pair is configured more than once".to_string()));
            }
            if entry.candidates.is_empty() {
                return Err(invalid("no candidate routes".to_string()));
            }
            for spec in &entry.candidates {
                let positive = |v: f64| v.is_finite() && v > 0.0;
                if !positive(spec.base_time_minutes) || !positive(spec.distance_km) {
                    return Err(invalid(format!(
                        "'{}' needs positive time and distance",
                        spec.description
                    )));
                }
            }
        }

        for window in &self.rush_windows {
            if window.start_hour > window.end_hour || window.end_hour > 23 {
                return Err(RouteError::InvalidTraffic(format!(
                    "window {}-{} is not within a day",
                    window.start_hour, window.end_hour
                )));
            }
        }
        for multiplier in [self.rush_multiplier, self.off_peak_multiplier] {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(RouteError::InvalidTraffic(format!(
                    "multiplier {multiplier} must be positive"
                )));
            }
        }
        Ok(())
    }
}
