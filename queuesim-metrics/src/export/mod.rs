//! Export functionality for experiment results
//!
//! This module provides exporters that write an experiment table to disk
//! for spreadsheets, pandas, or other tools.

pub mod csv;
pub mod json;

use crate::error::MetricsError;
use crate::replication::ExperimentRow;
use std::path::Path;

/// Trait for exporting experiment rows to different formats
pub trait MetricsExporter {
    /// Export rows to the configured destination
    fn export(&self, rows: &[ExperimentRow]) -> Result<(), MetricsError>;
}

/// Export rows to JSON format
///
/// # Example
/// ```no_run
/// use queuesim_metrics::{sweep, ExperimentConfig};
/// use queuesim_metrics::export::export_json;
///
/// let rows = sweep(&ExperimentConfig::default()).unwrap();
/// export_json(&rows, "results/metrics.json", true).unwrap();
/// ```
pub fn export_json(
    rows: &[ExperimentRow],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), MetricsError> {
    let exporter = json::JsonExporter::new(path.as_ref(), pretty);
    exporter.export(rows)
}

/// Export rows to CSV format
///
/// # Example
/// ```no_run
/// use queuesim_metrics::{sweep, ExperimentConfig};
/// use queuesim_metrics::export::export_csv;
///
/// let rows = sweep(&ExperimentConfig::default()).unwrap();
/// export_csv(&rows, "metrics.csv").unwrap();
/// ```
pub fn export_csv(rows: &[ExperimentRow], path: impl AsRef<Path>) -> Result<(), MetricsError> {
    let exporter = csv::CsvExporter::new(path.as_ref());
    exporter.export(rows)
}
