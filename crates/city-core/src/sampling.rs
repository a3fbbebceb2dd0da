//! Injectable random source
//!
//! Predictors never reach for a global generator. They draw through
//! `RandomSource`, so callers choose between entropy, a fixed seed, or a
//! fully deterministic fake.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::warn;

/// Source of the two draws the predictors need
pub trait RandomSource {
    /// Uniform real in `[low, high]`; returns `low` for an empty range
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Index drawn with probability proportional to `weights[i]`
    ///
    /// Callers pass at least one positive, finite weight. Empty, all-zero
    /// or negative weights are logged and yield index 0, so an empty
    /// slice must never be used to index afterwards.
    fn weighted_index(&mut self, weights: &[f64]) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        (**self).weighted_index(weights)
    }
}

/// Whether `[low, high]` has room to draw from; false for NaN bounds
fn is_open_range(low: f64, high: f64) -> bool {
    low.partial_cmp(&high) == Some(Ordering::Less)
}

fn draw_uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if !is_open_range(low, high) {
        return low;
    }
    rng.gen_range(low..=high)
}

fn draw_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(err) => {
            warn!("Unusable weights {:?} ({}), picking index 0", weights, err);
            0
        }
    }
}

/// Seedable generator backed by `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        draw_uniform(&mut self.rng, low, high)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        draw_weighted(&mut self.rng, weights)
    }
}

/// Per-thread generator, safe to use from any caller without sharing state
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        draw_uniform(&mut rand::thread_rng(), low, high)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        draw_weighted(&mut rand::thread_rng(), weights)
    }
}

/// Deterministic source for tests and reproducible demos
///
/// `uniform` returns the point at `fraction` of the range and
/// `weighted_index` always returns `index` (clamped to the slice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom {
    fraction: f64,
    index: usize,
}

impl FixedRandom {
    pub fn new(fraction: f64, index: usize) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            index,
        }
    }

    /// Midpoint of every range, first category
    pub fn midpoint() -> Self {
        Self::new(0.5, 0)
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !is_open_range(low, high) {
            return low;
        }
        low + self.fraction * (high - low)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        self.index.min(weights.len().saturating_sub(1))
    }
}
