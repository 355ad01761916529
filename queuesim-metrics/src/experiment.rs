//! Experiment description: which service means to sweep, and how often
//! to replicate each point.

use std::fs;
use std::path::Path;

use queuesim_core::SimulationConfig;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// A sweep over service means at a fixed interarrival mean.
///
/// The defaults reproduce the classic single-server study: interarrival
/// mean 1, service means 0.5 to 0.9, five replications of a thousand
/// customers each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub interarrival_mean: f64,
    pub service_means: Vec<f64>,
    pub replications: u32,
    pub customer_cap: u64,
    /// Seed of the first replication; replication `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            interarrival_mean: 1.0,
            service_means: vec![0.5, 0.6, 0.7, 0.8, 0.9],
            replications: 5,
            customer_cap: 1000,
            seed: 0,
        }
    }
}

impl ExperimentConfig {
    /// Load an experiment from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MetricsError> {
        let bytes = fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Simulation parameters for one point of the sweep.
    pub fn simulation_config(&self, service_mean: f64) -> SimulationConfig {
        SimulationConfig::new(self.interarrival_mean, service_mean, self.customer_cap)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.replications == 0 {
            return Err(MetricsError::InvalidExperiment(
                "replications must be at least 1".to_string(),
            ));
        }
        if self.service_means.is_empty() {
            return Err(MetricsError::InvalidExperiment(
                "no service means to sweep".to_string(),
            ));
        }
        for &mean in &self.service_means {
            self.simulation_config(mean).validate()?;
        }
        Ok(())
    }
}
