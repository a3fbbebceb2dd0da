//! Route Selector Implementation

use crate::config::{RouteSpec, RouteTable, TrafficWindow};
use crate::RouteError;
use input_validator::Validator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// A route with its traffic-adjusted travel time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub description: String,
    pub base_time_minutes: f64,
    pub distance_km: f64,
    /// `base_time_minutes * traffic_multiplier`
    pub adjusted_time_minutes: f64,
    pub traffic_multiplier: f64,
}

impl RouteCandidate {
    /// Minutes lost to traffic
    pub fn delay_minutes(&self) -> f64 {
        self.adjusted_time_minutes - self.base_time_minutes
    }
}

/// Static route database with rush-hour adjustment
#[derive(Debug, Clone)]
pub struct RouteSelector {
    routes: HashMap<(String, String), Vec<RouteSpec>>,
    rush_windows: Vec<TrafficWindow>,
    rush_multiplier: f64,
    off_peak_multiplier: f64,
    validator: Validator,
}

impl RouteSelector {
    /// Create a selector from a validated route table
    pub fn new(table: RouteTable) -> Result<Self, RouteError> {
        Self::with_validator(table, Validator::default())
    }

    /// Create a selector that checks hours against `validator`'s ranges
    pub fn with_validator(table: RouteTable, validator: Validator) -> Result<Self, RouteError> {
        table.validate()?;
        info!(
            "Creating route selector: {} origin/destination pairs, {} rush windows, hours {:?}",
            table.routes.len(),
            table.rush_windows.len(),
            validator.config().hour_range
        );
        Ok(Self::from_table(table, validator))
    }

    fn from_table(table: RouteTable, validator: Validator) -> Self {
        Self {
            routes: table
                .routes
                .into_iter()
                .map(|e| ((e.origin, e.destination), e.candidates))
                .collect(),
            rush_windows: table.rush_windows,
            rush_multiplier: table.rush_multiplier,
            off_peak_multiplier: table.off_peak_multiplier,
            validator,
        }
    }

    /// Traffic multiplier for an hour of day
    pub fn traffic_multiplier(&self, hour: u8) -> f64 {
        if self.rush_windows.iter().any(|w| w.contains(hour)) {
            self.rush_multiplier
        } else {
            self.off_peak_multiplier
        }
    }

    /// First listed candidate for the pair, adjusted for traffic
    ///
    /// `Ok(None)` means no route is configured for the pair. The first
    /// candidate is returned even if another would be faster.
    pub fn best_route(
        &self,
        origin: &str,
        destination: &str,
        hour: u8,
    ) -> Result<Option<RouteCandidate>, RouteError> {
        self.validator.validate_hour(hour)?;

        let best = self
            .lookup(origin, destination)
            .and_then(|specs| specs.first())
            .map(|spec| self.adjust(spec, hour));

        match &best {
            Some(route) => debug!(
                "Route {} -> {} at {:02}:00: {} ({:.1} min)",
                origin, destination, hour, route.description, route.adjusted_time_minutes
            ),
            None => debug!("No route found for {} -> {}", origin, destination),
        }
        Ok(best)
    }

    /// Every configured candidate for the pair, adjusted for traffic
    pub fn candidates(
        &self,
        origin: &str,
        destination: &str,
        hour: u8,
    ) -> Result<Vec<RouteCandidate>, RouteError> {
        self.validator.validate_hour(hour)?;
        Ok(self
            .lookup(origin, destination)
            .map(|specs| specs.iter().map(|s| self.adjust(s, hour)).collect())
            .unwrap_or_default())
    }

    fn lookup(&self, origin: &str, destination: &str) -> Option<&Vec<RouteSpec>> {
        self.routes
            .get(&(origin.to_string(), destination.to_string()))
    }

    fn adjust(&self, spec: &RouteSpec, hour: u8) -> RouteCandidate {
        let traffic_multiplier = self.traffic_multiplier(hour);
        RouteCandidate {
            description: spec.description.clone(),
            base_time_minutes: spec.base_time_minutes,
            distance_km: spec.distance_km,
            adjusted_time_minutes: spec.base_time_minutes * traffic_multiplier,
            traffic_multiplier,
        }
    }
}

impl Default for RouteSelector {
    fn default() -> Self {
        Self::from_table(RouteTable::default(), Validator::default())
    }
}
