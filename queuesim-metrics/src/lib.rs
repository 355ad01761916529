//! Experiments and reporting on top of the single-server engine
//!
//! This crate runs replications of a simulation, averages the figures a
//! queueing study reports, and exports the resulting table as CSV or JSON.

pub mod error;
pub mod experiment;
pub mod export;
pub mod replication;
pub mod sample;

pub use error::MetricsError;
pub use experiment::ExperimentConfig;
pub use export::{export_csv, export_json, MetricsExporter};
pub use replication::{run_replication, run_replications, sweep, ExperimentRow, ReplicationStats};
pub use sample::{exponential_sample, uniform_sample, SampleSummary};
