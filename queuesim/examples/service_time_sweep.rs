//! Average delay, utilization and total time for a single-server queue as
//! the service mean grows towards the interarrival mean.
//!
//! Writes `metrics.csv` in the working directory. Pass a JSON experiment
//! file as the first argument to override the default sweep:
//!
//! ```bash
//! cargo run --example service_time_sweep -- experiment.json
//! ```

use queuesim::core::init_simulation_logging_with_level;
use queuesim::metrics::{export_csv, exponential_sample, uniform_sample, SampleSummary};
use queuesim::prelude::*;

fn main() -> Result<(), MetricsError> {
    init_simulation_logging_with_level("warn");

    let experiment = match std::env::args().nth(1) {
        Some(path) => ExperimentConfig::from_json_file(path)?,
        None => ExperimentConfig::default(),
    };

    let rows = sweep(&experiment)?;
    export_csv(&rows, "metrics.csv")?;

    println!("service  avg delay  utilization  total time");
    for row in &rows {
        println!(
            "{:>7.2}  {:>9.2}  {:>11.2}  {:>10.2}",
            row.service_mean, row.average_delay, row.utilization, row.total_time
        );
    }

    if let Some(exp) = SampleSummary::from_values(&exponential_sample(100, 1.0, experiment.seed)) {
        println!(
            "Exp: min {:.4}, max {:.4}, median {:.4}",
            exp.min, exp.max, exp.median
        );
    }
    if let Some(uni) = SampleSummary::from_values(&uniform_sample(100, experiment.seed)) {
        println!(
            "Uni: min {:.4}, max {:.4}, median {:.4}",
            uni.min, uni.max, uni.median
        );
    }
    Ok(())
}
