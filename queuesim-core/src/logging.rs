//! Structured logging for simulation debugging
//!
//! The engine reports through `tracing`: run start and completion at INFO,
//! every arrival and departure (with the clock and the waiting-line length)
//! at DEBUG, and every dequeued event at TRACE. This module installs a
//! subscriber so those records reach the terminal.
//!
//! # Controlling output
//!
//! ```bash
//! # Default (info level)
//! cargo run --example single_run
//!
//! # Per-customer arrivals and departures
//! RUST_LOG=queuesim_core=debug cargo run --example single_run
//!
//! # Every dequeued event
//! RUST_LOG=queuesim_core::simulation=trace cargo run --example single_run
//! ```
//!
//! `RUST_LOG` always wins over the level passed to the initialisers.
//! Initialising twice is harmless: the second call leaves the first
//! subscriber in place.

use tracing::{info, Span};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, filter::EnvFilter};

/// Initialize logging for the simulation with sensible defaults
pub fn init_simulation_logging() {
    init_simulation_logging_with_level("info")
}

/// Initialize logging with a specific level
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
///
/// # Example
/// ```rust
/// use queuesim_core::logging::init_simulation_logging_with_level;
///
/// init_simulation_logging_with_level("debug");
/// ```
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{level},queuesim_core={level},queuesim_metrics={level}").into());

    let installed = tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(true)
            .with_level(true)
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!("Simulation logging initialized at level: {}", level);
    }
}

/// Initialize logging with every engine event visible
pub fn init_detailed_simulation_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "debug,queuesim_core=trace,queuesim_metrics=debug".into());

    let installed = tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!("Detailed simulation logging initialized");
    }
}

/// Create a span for tracking one simulation run, e.g. a replication
pub fn simulation_span(name: &str) -> Span {
    tracing::info_span!("simulation", name = name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, trace};

    #[test]
    fn test_logging_initialization() {
        init_simulation_logging_with_level("debug");
        // A second initialisation must not panic.
        init_detailed_simulation_logging();

        info!("Test info message");
        debug!("Test debug message");
        trace!("Test trace message");
    }

    #[test]
    fn test_span_creation() {
        let span = simulation_span("replication-0");
        let _guard = span.enter();
        info!("inside span");
    }
}
