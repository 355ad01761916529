//! Error types for the simulation engine

use thiserror::Error;

use crate::randomness::DrawSite;

/// Top-level error type for simulation operations
///
/// Every variant is a contract violation: either the caller configured the
/// engine with values the sampling contract cannot honour, or a collaborator
/// returned something that would corrupt the event ordering. Draining the
/// event queue is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Invalid configuration: {name} must be a positive finite mean, got {value}")]
    InvalidMean { name: &'static str, value: f64 },

    #[error("Invalid configuration: customer cap must be at least 1")]
    InvalidCustomerCap,

    #[error("Time validation error: expected finite non-negative time, got {0}")]
    InvalidTime(f64),

    #[error("Variate source returned {value} for {site} sample with mean {mean}")]
    InvalidSample { site: DrawSite, mean: f64, value: f64 },

    #[error("Event at {event_time} would move the clock backwards from {clock}")]
    ClockRegression { clock: f64, event_time: f64 },

    #[error("Simulation has already been run")]
    AlreadyRun,
}
