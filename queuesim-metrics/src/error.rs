//! Error types for replications and export

use queuesim_core::SimError;
use thiserror::Error;

/// Errors raised while running experiments or writing their results
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimError),

    #[error("Invalid experiment: {0}")]
    InvalidExperiment(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
