//! Randomness facade for the simulation engine.
//!
//! The engine never draws random numbers itself. It asks an injected
//! [`VariateSource`] for samples and labels each request with the
//! [`DrawSite`] it comes from, so a source can keep independent streams per
//! site or replay a scripted trace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled sampling location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSite {
    /// Time between two consecutive customer arrivals.
    Interarrival,
    /// Time the server spends on one customer.
    Service,
}

impl DrawSite {
    pub const fn tag(&self) -> &'static str {
        match self {
            DrawSite::Interarrival => "interarrival",
            DrawSite::Service => "service",
        }
    }
}

impl fmt::Display for DrawSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Sampling interface that can be swapped for tracing / replay.
///
/// Implementations must return a non-negative finite value for any positive
/// `mean`. The engine rejects anything else with
/// [`SimError::InvalidSample`](crate::SimError::InvalidSample).
pub trait VariateSource {
    /// Draw one variate with the given expected value.
    fn sample(&mut self, site: DrawSite, mean: f64) -> f64;
}

impl<T: VariateSource + ?Sized> VariateSource for &mut T {
    fn sample(&mut self, site: DrawSite, mean: f64) -> f64 {
        (**self).sample(site, mean)
    }
}

impl<T: VariateSource + ?Sized> VariateSource for Box<T> {
    fn sample(&mut self, site: DrawSite, mean: f64) -> f64 {
        (**self).sample(site, mean)
    }
}
