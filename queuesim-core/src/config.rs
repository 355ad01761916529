//! Run parameters for a single simulation

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Parameters of one simulation run.
///
/// The defaults describe the first point of the classic sweep: one customer
/// per time unit, half a time unit of service, a thousand customers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Expected time between two arrivals.
    pub interarrival_mean: f64,
    /// Expected service duration.
    pub service_mean: f64,
    /// Total number of customers that arrive before the arrival process stops.
    pub customer_cap: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interarrival_mean: 1.0,
            service_mean: 0.5,
            customer_cap: 1000,
        }
    }
}

impl SimulationConfig {
    pub fn new(interarrival_mean: f64, service_mean: f64, customer_cap: u64) -> Self {
        Self {
            interarrival_mean,
            service_mean,
            customer_cap,
        }
    }

    #[must_use]
    pub fn with_interarrival_mean(mut self, mean: f64) -> Self {
        self.interarrival_mean = mean;
        self
    }

    #[must_use]
    pub fn with_service_mean(mut self, mean: f64) -> Self {
        self.service_mean = mean;
        self
    }

    #[must_use]
    pub fn with_customer_cap(mut self, cap: u64) -> Self {
        self.customer_cap = cap;
        self
    }

    /// Reject parameters the sampling contract cannot honour.
    pub fn validate(&self) -> Result<(), SimError> {
        check_mean("interarrival_mean", self.interarrival_mean)?;
        check_mean("service_mean", self.service_mean)?;
        if self.customer_cap == 0 {
            return Err(SimError::InvalidCustomerCap);
        }
        Ok(())
    }
}

fn check_mean(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidMean { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.customer_cap, 1000);
    }

    #[test]
    fn rejects_non_positive_means() {
        let zero = SimulationConfig::default().with_interarrival_mean(0.0);
        assert_eq!(
            zero.validate(),
            Err(SimError::InvalidMean {
                name: "interarrival_mean",
                value: 0.0
            })
        );

        let negative = SimulationConfig::default().with_service_mean(-0.5);
        assert!(matches!(
            negative.validate(),
            Err(SimError::InvalidMean { name: "service_mean", .. })
        ));

        let nan = SimulationConfig::default().with_service_mean(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_zero_cap() {
        let config = SimulationConfig::new(1.0, 0.5, 0);
        assert_eq!(config.validate(), Err(SimError::InvalidCustomerCap));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "service_mean": 0.9 }"#).unwrap();
        assert_eq!(config, SimulationConfig::new(1.0, 0.9, 1000));
    }
}
