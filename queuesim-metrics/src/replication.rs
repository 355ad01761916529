//! Replication driver
//!
//! Runs independent, seeded copies of the same simulation and averages the
//! figures a queueing study reports: mean delay in queue, server
//! utilization and total simulated time.

use queuesim_core::{simulation_span, ExponentialVariates, RunSummary, Simulation, SimulationConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MetricsError;
use crate::experiment::ExperimentConfig;

/// Headline figures of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplicationStats {
    pub average_delay: f64,
    pub utilization: f64,
    pub total_time: f64,
}

impl ReplicationStats {
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            average_delay: summary.average_delay(),
            utilization: summary.utilization(),
            total_time: summary.final_clock,
        }
    }
}

/// One line of an experiment table: the averages over all replications of
/// one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRow {
    pub interarrival_mean: f64,
    pub service_mean: f64,
    pub replications: u32,
    pub average_delay: f64,
    pub utilization: f64,
    pub total_time: f64,
}

impl ExperimentRow {
    fn from_replications(config: &SimulationConfig, runs: &[ReplicationStats]) -> Self {
        let n = runs.len() as f64;
        let mean_of = |f: fn(&ReplicationStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        Self {
            interarrival_mean: config.interarrival_mean,
            service_mean: config.service_mean,
            replications: runs.len() as u32,
            average_delay: mean_of(|r| r.average_delay),
            utilization: mean_of(|r| r.utilization),
            total_time: mean_of(|r| r.total_time),
        }
    }
}

/// Run one seeded replication to completion.
pub fn run_replication(config: SimulationConfig, seed: u64) -> Result<ReplicationStats, MetricsError> {
    let mut sim = Simulation::new(config, ExponentialVariates::seeded(seed))?;
    sim.run()?;
    let stats = ReplicationStats::from_summary(&sim.summary());
    debug!(
        seed,
        average_delay = stats.average_delay,
        utilization = stats.utilization,
        total_time = stats.total_time,
        "Replication finished"
    );
    Ok(stats)
}

/// Run `replications` independent copies of `config` with seeds
/// `seed, seed + 1, ...` and average them.
pub fn run_replications(
    config: SimulationConfig,
    replications: u32,
    seed: u64,
) -> Result<ExperimentRow, MetricsError> {
    if replications == 0 {
        return Err(MetricsError::InvalidExperiment(
            "replications must be at least 1".to_string(),
        ));
    }

    let runs = (0..replications)
        .map(|i| {
            let span = simulation_span(&format!("replication-{i}"));
            let _guard = span.enter();
            run_replication(config, seed.wrapping_add(u64::from(i)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExperimentRow::from_replications(&config, &runs))
}

/// Run every point of an experiment, one row per service mean.
pub fn sweep(experiment: &ExperimentConfig) -> Result<Vec<ExperimentRow>, MetricsError> {
    experiment.validate()?;

    experiment
        .service_means
        .iter()
        .map(|&service_mean| -> Result<ExperimentRow, MetricsError> {
            let config = experiment.simulation_config(service_mean);
            let row = run_replications(config, experiment.replications, experiment.seed)?;
            info!(
                interarrival_mean = row.interarrival_mean,
                service_mean = row.service_mean,
                average_delay = row.average_delay,
                utilization = row.utilization,
                "Sweep point completed"
            );
            Ok(row)
        })
        .collect()
}
