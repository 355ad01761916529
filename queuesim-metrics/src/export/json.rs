//! JSON export for experiment tables
//!
//! Writes the rows unrounded, wrapped with the row count, for programmatic
//! consumption.

use crate::error::MetricsError;
use crate::export::MetricsExporter;
use crate::replication::ExperimentRow;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON exporter for experiment rows
#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter
    ///
    /// # Arguments
    /// * `path` - Output file path
    /// * `pretty` - Whether to pretty-print the JSON (adds whitespace for readability)
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }
}

/// Complete export data structure
#[derive(Debug, Serialize)]
struct ExportData<'a> {
    row_count: usize,
    rows: &'a [ExperimentRow],
}

impl MetricsExporter for JsonExporter {
    fn export(&self, rows: &[ExperimentRow]) -> Result<(), MetricsError> {
        let export_data = ExportData {
            row_count: rows.len(),
            rows,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&export_data)
        } else {
            serde_json::to_string(&export_data)
        }?;

        let mut file = File::create(&self.path)
            .map_err(|e| MetricsError::ExportError(format!("Failed to create file: {e}")))?;

        file.write_all(json.as_bytes())
            .map_err(|e| MetricsError::ExportError(format!("Failed to write to file: {e}")))?;

        Ok(())
    }
}
