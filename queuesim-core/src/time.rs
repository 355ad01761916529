//! Simulation time management

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::SimError;

/// Simulation time in abstract time units
///
/// SimTime represents a point in simulation time measured from the start of
/// the run. Values are always finite and non-negative, which makes the type
/// totally ordered and safe to use as a priority key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SimTime(f64);

impl SimTime {
    /// Create a new SimTime at the simulation start (time zero)
    pub const fn zero() -> Self {
        SimTime(0.0)
    }

    /// Create a SimTime from a raw time value
    ///
    /// Fails if the value is negative, infinite, or NaN.
    pub fn new(value: f64) -> Result<Self, SimError> {
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidTime(value));
        }
        // Normalises -0.0 so ordering and equality agree.
        Ok(SimTime(value + 0.0))
    }

    /// Get the raw time value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Return the time `delta` units after this one
    pub fn advance(&self, delta: f64) -> Result<Self, SimError> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(SimError::InvalidTime(delta));
        }
        SimTime::new(self.0 + delta)
    }

    /// Time elapsed since `earlier`, saturating at zero
    pub fn duration_since(&self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for SimTime {
    type Error = SimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        SimTime::new(value)
    }
}

impl From<SimTime> for f64 {
    fn from(time: SimTime) -> Self {
        time.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
