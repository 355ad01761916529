//! CSV export for experiment tables
//!
//! One header line and one row per sweep point, with averaged figures
//! rounded to two decimals.

use crate::error::MetricsError;
use crate::export::MetricsExporter;
use crate::replication::ExperimentRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 5] = [
    "Interarrival time (mins)",
    "Service time (mins)",
    "Avg delay in queue (mins)",
    "Server utilization (mins)",
    "Total sim time (mins)",
];

/// CSV exporter for experiment rows
#[derive(Debug)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Write the table to any writer.
    pub fn write_to<W: Write>(&self, mut out: W, rows: &[ExperimentRow]) -> Result<(), MetricsError> {
        let header = HEADER.iter().map(|h| escape_csv(h)).collect::<Vec<_>>().join(",");
        writeln!(out, "{header}")
            .map_err(|e| MetricsError::ExportError(format!("Failed to write header: {e}")))?;

        for row in rows {
            writeln!(
                out,
                "{},{},{},{},{}",
                row.interarrival_mean,
                row.service_mean,
                round2(row.average_delay),
                round2(row.utilization),
                round2(row.total_time)
            )
            .map_err(|e| MetricsError::ExportError(format!("Failed to write row: {e}")))?;
        }

        out.flush()?;
        Ok(())
    }
}

impl MetricsExporter for CsvExporter {
    fn export(&self, rows: &[ExperimentRow]) -> Result<(), MetricsError> {
        let file = File::create(&self.path)
            .map_err(|e| MetricsError::ExportError(format!("Failed to create file: {e}")))?;
        self.write_to(BufWriter::new(file), rows)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Escape CSV field (add quotes if needed)
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
