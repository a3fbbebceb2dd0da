//! CityAssist Core Types
//!
//! Value objects shared by every predictor:
//! - `Priority` and `ConfidenceScore`
//! - `FactorTable` lookups with an explicit fallback path
//! - `RandomSource`, the injectable source of jitter and sampling

mod confidence;
mod lookup;
mod priority;
mod sampling;

pub use confidence::ConfidenceScore;
pub use lookup::{FactorTable, Lookup, NamedFactor};
pub use priority::Priority;
pub use sampling::{FixedRandom, RandomSource, StdRandom, ThreadRandom};
