//! Route Selector
//!
//! Looks up candidate routes for an origin/destination pair and scales
//! their travel time by a time-of-day traffic multiplier.

mod config;
mod selector;

pub use config::{RouteEntry, RouteSpec, RouteTable, TrafficWindow};
pub use selector::{RouteCandidate, RouteSelector};

use input_validator::ValidationError;
use thiserror::Error;

/// Route selector error types
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Invalid route {origin} -> {destination}: {reason}")]
    InvalidRoute {
        origin: String,
        destination: String,
        reason: String,
    },

    #[error("Invalid traffic configuration: {0}")]
    InvalidTraffic(String),
}
