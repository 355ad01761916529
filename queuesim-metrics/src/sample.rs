//! Descriptive statistics for raw samples, used to sanity-check variate
//! sources.

use queuesim_core::{DrawSite, ExponentialVariates, VariateSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
}

impl SampleSummary {
    /// Summarise `values`; `None` for an empty sample or one containing NaN.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            median,
            mean: sorted.iter().sum::<f64>() / count as f64,
        })
    }
}

/// `n` exponential draws with the given mean, from a seeded source.
pub fn exponential_sample(n: usize, mean: f64, seed: u64) -> Vec<f64> {
    let mut source = ExponentialVariates::seeded(seed);
    (0..n).map(|_| source.sample(DrawSite::Service, mean)).collect()
}

/// `n` uniform draws from `[0, 1)`.
pub fn uniform_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<f64>()).collect()
}
