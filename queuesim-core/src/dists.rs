//! Variate sources for interarrival and service times
//!
//! This module provides the concrete [`VariateSource`] implementations used
//! to drive a simulation: an inversion-sampled exponential source backed by a
//! seedable RNG, a degenerate constant source, and a scripted source for
//! replaying hand-written traces.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::randomness::{DrawSite, VariateSource};

/// Map a uniform draw `u` in `[0, 1)` onto an exponential variate with the
/// given mean.
///
/// `1 - u` lies in `(0, 1]`, so the logarithm is always finite and the result
/// is never negative.
pub fn inverse_exponential(u: f64, mean: f64) -> f64 {
    -(1.0 - u).ln() * mean
}

// =============================================================================
// Exponential
// =============================================================================

/// Exponential variates generated by inversion sampling
///
/// Interarrival and service samples share one RNG stream, so two sources
/// created with the same seed produce identical runs.
#[derive(Debug, Clone)]
pub struct ExponentialVariates {
    rng: StdRng,
}

impl ExponentialVariates {
    /// Create a reproducible source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl VariateSource for ExponentialVariates {
    fn sample(&mut self, _site: DrawSite, mean: f64) -> f64 {
        let u: f64 = self.rng.gen();
        inverse_exponential(u, mean)
    }
}

// =============================================================================
// Constant
// =============================================================================

/// Degenerate source that always returns the requested mean
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantVariates;

impl VariateSource for ConstantVariates {
    fn sample(&mut self, _site: DrawSite, mean: f64) -> f64 {
        mean
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays scripted samples per draw site
///
/// Once a site's script is exhausted the source falls back to returning the
/// mean, like [`ConstantVariates`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedVariates {
    interarrival: VecDeque<f64>,
    service: VecDeque<f64>,
}

impl ScriptedVariates {
    pub fn new(
        interarrival: impl IntoIterator<Item = f64>,
        service: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            interarrival: interarrival.into_iter().collect(),
            service: service.into_iter().collect(),
        }
    }

    /// Number of scripted samples not yet consumed for `site`
    pub fn remaining(&self, site: DrawSite) -> usize {
        match site {
            DrawSite::Interarrival => self.interarrival.len(),
            DrawSite::Service => self.service.len(),
        }
    }
}

impl VariateSource for ScriptedVariates {
    fn sample(&mut self, site: DrawSite, mean: f64) -> f64 {
        let script = match site {
            DrawSite::Interarrival => &mut self.interarrival,
            DrawSite::Service => &mut self.service,
        };
        script.pop_front().unwrap_or(mean)
    }
}
