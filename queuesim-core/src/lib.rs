//! Discrete event simulation engine for a single-server queue.
//!
//! Simulated time only moves when something happens: a customer arrives or
//! the server finishes with one. This crate provides the pieces needed to
//! run such a model: a time-ordered event queue, the engine that consumes
//! it, and the variate sources that feed it interarrival and service times.
//!
//! # Architecture Overview
//!
//! - [`EventQueue`]: min-heap of pending events keyed by `(time, sequence)`.
//!   Events sharing a timestamp leave in the order they were enqueued.
//!
//! - [`Simulation`]: owns the queue, the clock, the server state and the
//!   waiting line. [`Simulation::run`] drains the queue; the arrival and
//!   departure handlers schedule the events that keep it going.
//!
//! - [`VariateSource`]: the injected sampling capability. Use
//!   [`ExponentialVariates`] for Poisson arrivals and exponential service,
//!   [`ConstantVariates`] for deterministic runs, or
//!   [`ScriptedVariates`] to replay a trace.
//!
//! # Basic Usage
//!
//! ```rust
//! use queuesim_core::{ExponentialVariates, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(1.0, 0.8, 1000);
//! let mut simulation = Simulation::new(config, ExponentialVariates::seeded(7))?;
//! simulation.run()?;
//!
//! let summary = simulation.summary();
//! println!(
//!     "avg delay {:.2}, utilization {:.2}, clock {}",
//!     summary.average_delay(),
//!     summary.utilization(),
//!     simulation.clock()
//! );
//! # Ok::<(), queuesim_core::SimError>(())
//! ```
//!
//! # Time Model
//!
//! All timing uses [`SimTime`], a validated non-negative time in abstract
//! units. Wall-clock time plays no part in a run.

pub mod config;
pub mod dists;
pub mod error;
pub mod logging;
pub mod queue;
pub mod randomness;
pub mod simulation;
pub mod time;
pub mod types;

pub use config::SimulationConfig;
pub use dists::{ConstantVariates, ExponentialVariates, ScriptedVariates};
pub use error::SimError;
pub use logging::{init_simulation_logging, init_simulation_logging_with_level, init_detailed_simulation_logging, simulation_span};
pub use queue::{EventQueue, QueueEntry, SequenceCounter};
pub use randomness::{DrawSite, VariateSource};
pub use simulation::{RunSummary, Simulation};
pub use time::SimTime;
pub use types::{Customer, Event, EventId, EventKind, ServerState};
