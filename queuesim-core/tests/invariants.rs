//! Invariant checks over randomized (but seeded) runs.

use queuesim_core::{
    EventKind, ExponentialVariates, SequenceCounter, ServerState, Simulation, SimulationConfig,
    SimTime,
};

const SEEDS: [u64; 6] = [0, 1, 7, 42, 1234, 987_654_321];

fn configs() -> Vec<SimulationConfig> {
    vec![
        SimulationConfig::new(1.0, 0.5, 200),
        SimulationConfig::new(1.0, 0.9, 500),
        SimulationConfig::new(1.0, 1.5, 300),
        SimulationConfig::new(0.2, 3.0, 50),
        SimulationConfig::new(10.0, 0.1, 1),
    ]
}

#[test]
fn clock_never_moves_backwards() {
    for config in configs() {
        for seed in SEEDS {
            let mut sim = Simulation::new(config, ExponentialVariates::seeded(seed)).unwrap();
            let mut last = SimTime::zero();
            sim.run_with(|sim, event| {
                assert!(sim.clock() >= last, "clock regressed for {config:?} seed {seed}");
                assert_eq!(sim.clock(), event.time());
                last = sim.clock();
            })
            .unwrap();
        }
    }
}

#[test]
fn busy_server_has_exactly_one_pending_departure() {
    for config in configs() {
        for seed in SEEDS {
            let mut sim = Simulation::new(config, ExponentialVariates::seeded(seed)).unwrap();
            sim.run_with(|sim, _| match sim.server_state() {
                ServerState::Busy => assert_eq!(sim.pending_departures(), 1),
                ServerState::Idle => {
                    assert_eq!(sim.pending_departures(), 0);
                    assert_eq!(sim.queue_len(), 0);
                }
            })
            .unwrap();
        }
    }
}

#[test]
fn run_terminates_with_exactly_cap_arrivals() {
    for config in configs() {
        for seed in SEEDS {
            let mut sim = Simulation::new(config, ExponentialVariates::seeded(seed)).unwrap();
            let mut arrivals = 0;
            let mut departures = 0;
            sim.run_with(|_, event| match event.kind() {
                EventKind::Arrival => arrivals += 1,
                EventKind::Departure => departures += 1,
            })
            .unwrap();

            assert_eq!(sim.arrivals_scheduled(), config.customer_cap);
            assert_eq!(arrivals, config.customer_cap);
            assert_eq!(departures, config.customer_cap);
            assert_eq!(sim.customers_arrived(), config.customer_cap);
            assert_eq!(sim.customers_served(), config.customer_cap);
            assert_eq!(sim.pending_events(), 0);
            assert_eq!(sim.queue_len(), 0);
            assert_eq!(sim.server_state(), ServerState::Idle);
        }
    }
}

#[test]
fn busy_time_never_exceeds_elapsed_time() {
    for config in configs() {
        for seed in SEEDS {
            let mut sim = Simulation::new(config, ExponentialVariates::seeded(seed)).unwrap();
            sim.run().unwrap();

            let summary = sim.summary();
            assert!(summary.total_wait_time >= 0.0);
            assert!(summary.utilization() <= 1.0 + 1e-9);
        }
    }
}

#[test]
fn same_seed_gives_identical_runs() {
    let run = |seed: u64| {
        let mut sim = Simulation::new(
            SimulationConfig::new(1.0, 0.8, 1000),
            ExponentialVariates::seeded(seed),
        )
        .unwrap();
        let mut trace = Vec::new();
        sim.run_with(|_, event| trace.push(*event)).unwrap();
        (trace, sim.summary())
    };

    let baseline = run(99);
    for _ in 0..5 {
        assert_eq!(run(99), baseline);
    }
    assert_ne!(run(100).1, baseline.1);
}

#[test]
fn replications_can_share_a_sequence_counter() {
    let counter = SequenceCounter::new();
    let config = SimulationConfig::new(1.0, 0.5, 20);

    let mut first =
        Simulation::with_counter(config, ExponentialVariates::seeded(1), counter.clone()).unwrap();
    first.run().unwrap();
    let after_first = counter.peek();
    // One sequence number per arrival and per departure.
    assert_eq!(after_first, 40);

    let mut second =
        Simulation::with_counter(config, ExponentialVariates::seeded(1), counter.clone()).unwrap();
    second.run().unwrap();
    assert_eq!(counter.peek(), 80);

    // Numbering does not influence the outcome.
    assert_eq!(first.summary(), second.summary());
}
