//! One simulation run with structured logging.
//!
//! ```bash
//! RUST_LOG=queuesim_core=debug cargo run --example single_run
//! ```

use queuesim::core::init_simulation_logging;
use queuesim::prelude::*;
use tracing::info;

fn main() -> Result<(), SimError> {
    init_simulation_logging();

    let config = SimulationConfig::new(1.0, 0.8, 20);
    let mut sim = Simulation::new(config, ExponentialVariates::seeded(1))?;
    sim.run()?;

    let summary = sim.summary();
    info!(
        final_clock = %sim.clock(),
        average_delay = summary.average_delay(),
        utilization = summary.utilization(),
        max_queue_len = summary.max_queue_len,
        "Run finished"
    );
    Ok(())
}
