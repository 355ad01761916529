//! # queuesim - single-server queue simulator
//!
//! A deterministic, replayable discrete event simulation of one queue in
//! front of one server.
//!
//! ## Crates
//!
//! - [`core`]: event queue, simulation engine, variate sources, logging
//! - [`metrics`]: replications, sweeps, CSV/JSON export
//!
//! ## Examples
//!
//! - `single_run`: one run with trace-level logging available via `RUST_LOG`
//! - `service_time_sweep`: the classic study of delay and utilization as the
//!   service mean approaches the interarrival mean

pub use queuesim_core as core;

pub use queuesim_metrics as metrics;

// Convenience re-exports of commonly used items
pub mod prelude {
    //! Commonly used types and traits

    pub use queuesim_core::{
        ConstantVariates, DrawSite, Event, EventKind, EventQueue, ExponentialVariates,
        RunSummary, ScriptedVariates, ServerState, SimError, SimTime, Simulation,
        SimulationConfig, VariateSource,
    };

    pub use queuesim_metrics::{
        run_replications, sweep, ExperimentConfig, ExperimentRow, MetricsError,
    };
}
