//! The single-server queue engine.
//!
//! [`Simulation`] owns the event queue, the clock, the server and the
//! waiting line. Each call to [`Simulation::step`] pops the earliest event,
//! moves the clock to it and runs the matching handler; handlers schedule
//! further events. A run ends when the queue drains, which happens once the
//! arrival cap is reached and the last customer has departed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::queue::{EventQueue, SequenceCounter};
use crate::randomness::{DrawSite, VariateSource};
use crate::time::SimTime;
use crate::types::{Customer, Event, EventKind, ServerState};

/// Single-server, single-queue simulation driven by an injected
/// [`VariateSource`].
///
/// # Example
///
/// ```
/// # use queuesim_core::{ConstantVariates, Simulation, SimulationConfig};
/// let config = SimulationConfig::new(2.0, 1.0, 5);
/// let mut sim = Simulation::new(config, ConstantVariates).unwrap();
/// sim.run().unwrap();
/// assert_eq!(sim.customers_arrived(), 5);
/// assert_eq!(sim.total_wait_time(), 0.0);
/// ```
#[derive(Debug)]
pub struct Simulation<R> {
    config: SimulationConfig,
    source: R,
    queue: EventQueue,
    clock: SimTime,
    server: ServerState,
    waiting_line: VecDeque<Customer>,
    customers_arrived: u64,
    customers_served: u64,
    arrivals_scheduled: u64,
    events_processed: u64,
    max_queue_len: usize,
    total_wait_time: f64,
    total_service_time: f64,
    has_run: bool,
}

impl<R: VariateSource> Simulation<R> {
    /// Creates a simulation and schedules its first arrival.
    pub fn new(config: SimulationConfig, source: R) -> Result<Self, SimError> {
        Self::with_counter(config, source, SequenceCounter::new())
    }

    /// Like [`Simulation::new`], but event sequence numbers come from a
    /// caller-supplied counter, e.g. one shared by consecutive replications.
    pub fn with_counter(
        config: SimulationConfig,
        source: R,
        counter: SequenceCounter,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let mut sim = Self {
            config,
            source,
            queue: EventQueue::with_counter(counter),
            clock: SimTime::zero(),
            server: ServerState::Idle,
            waiting_line: VecDeque::new(),
            customers_arrived: 0,
            customers_served: 0,
            arrivals_scheduled: 0,
            events_processed: 0,
            max_queue_len: 0,
            total_wait_time: 0.0,
            total_service_time: 0.0,
            has_run: false,
        };
        sim.schedule_arrival()?;
        Ok(sim)
    }

    /// Runs the event loop until no events are left.
    ///
    /// An engine runs exactly once; a second call fails with
    /// [`SimError::AlreadyRun`].
    pub fn run(&mut self) -> Result<(), SimError> {
        self.run_with(|_, _| {})
    }

    /// Runs the event loop, calling `observer` after each processed event.
    #[instrument(skip(self, observer), fields(
        interarrival_mean = self.config.interarrival_mean,
        service_mean = self.config.service_mean,
        customer_cap = self.config.customer_cap,
    ))]
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<(), SimError>
    where
        F: FnMut(&Self, &Event),
    {
        if self.has_run {
            return Err(SimError::AlreadyRun);
        }
        self.has_run = true;

        info!("Starting simulation run");
        while let Some(event) = self.step()? {
            observer(&*self, &event);
        }
        info!(
            final_clock = %self.clock,
            customers_served = self.customers_served,
            total_wait_time = self.total_wait_time,
            total_service_time = self.total_service_time,
            "Simulation run completed"
        );
        Ok(())
    }

    /// Performs one step of the simulation. Returns the processed event, or
    /// `None` once the queue is drained.
    pub fn step(&mut self) -> Result<Option<Event>, SimError> {
        let Some(event) = self.queue.dequeue() else {
            return Ok(None);
        };

        if event.time() < self.clock {
            return Err(SimError::ClockRegression {
                clock: self.clock.as_f64(),
                event_time: event.time().as_f64(),
            });
        }
        self.clock = event.time();
        self.events_processed += 1;
        trace!(clock = %self.clock, %event, "Processing event");

        match event.kind() {
            EventKind::Arrival => self.on_arrival()?,
            EventKind::Departure => self.on_departure()?,
        }
        Ok(Some(event))
    }

    fn on_arrival(&mut self) -> Result<(), SimError> {
        let customer = Customer {
            arrival_time: self.clock,
        };
        self.customers_arrived += 1;

        if self.customers_arrived < self.config.customer_cap {
            self.schedule_arrival()?;
        }

        match self.server {
            ServerState::Idle => self.start_service()?,
            ServerState::Busy => {
                self.waiting_line.push_back(customer);
                self.max_queue_len = self.max_queue_len.max(self.waiting_line.len());
            }
        }

        debug!(
            clock = %self.clock,
            queue_len = self.waiting_line.len(),
            "Arrive"
        );
        Ok(())
    }

    fn on_departure(&mut self) -> Result<(), SimError> {
        self.server = ServerState::Idle;
        self.customers_served += 1;

        if let Some(customer) = self.waiting_line.pop_front() {
            self.total_wait_time += self.clock.duration_since(customer.arrival_time);
            self.start_service()?;
        }

        debug!(
            clock = %self.clock,
            queue_len = self.waiting_line.len(),
            "Depart"
        );
        Ok(())
    }

    fn schedule_arrival(&mut self) -> Result<(), SimError> {
        let delay = self.draw(DrawSite::Interarrival)?;
        let time = self.clock.advance(delay)?;
        self.queue.enqueue(Event::arrival(time));
        self.arrivals_scheduled += 1;
        Ok(())
    }

    /// Puts the server to work on one customer and schedules its departure.
    fn start_service(&mut self) -> Result<(), SimError> {
        let duration = self.draw(DrawSite::Service)?;
        let time = self.clock.advance(duration)?;
        self.server = ServerState::Busy;
        self.queue.enqueue(Event::departure(time));
        self.total_service_time += duration;
        Ok(())
    }

    fn draw(&mut self, site: DrawSite) -> Result<f64, SimError> {
        let mean = match site {
            DrawSite::Interarrival => self.config.interarrival_mean,
            DrawSite::Service => self.config.service_mean,
        };
        let value = self.source.sample(site, mean);
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidSample { site, mean, value });
        }
        Ok(value)
    }
}

impl<R> Simulation<R> {
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current simulation time; after a run, the time of the last event.
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn server_state(&self) -> ServerState {
        self.server
    }

    /// Customers currently waiting, not counting the one in service.
    pub fn queue_len(&self) -> usize {
        self.waiting_line.len()
    }

    /// Longest the waiting line has been so far.
    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }

    pub fn customers_arrived(&self) -> u64 {
        self.customers_arrived
    }

    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    /// Arrival events ever put on the event queue, including the first one.
    pub fn arrivals_scheduled(&self) -> u64 {
        self.arrivals_scheduled
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Sum over all served customers of the time spent waiting in line.
    pub fn total_wait_time(&self) -> f64 {
        self.total_wait_time
    }

    /// Total time the server has been (or is committed to be) busy.
    pub fn total_service_time(&self) -> f64 {
        self.total_service_time
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_departures(&self) -> usize {
        self.queue.pending(EventKind::Departure)
    }

    pub fn next_event_time(&self) -> Option<SimTime> {
        self.queue.peek_time()
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Snapshot of the counters for reporting.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            config: self.config,
            final_clock: self.clock.as_f64(),
            customers_arrived: self.customers_arrived,
            customers_served: self.customers_served,
            total_wait_time: self.total_wait_time,
            total_service_time: self.total_service_time,
            max_queue_len: self.max_queue_len,
            events_processed: self.events_processed,
        }
    }
}

/// Counters of a finished (or in-progress) run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub config: SimulationConfig,
    pub final_clock: f64,
    pub customers_arrived: u64,
    pub customers_served: u64,
    pub total_wait_time: f64,
    pub total_service_time: f64,
    pub max_queue_len: usize,
    pub events_processed: u64,
}

impl RunSummary {
    /// Mean delay in queue per customer.
    pub fn average_delay(&self) -> f64 {
        self.total_wait_time / self.config.customer_cap as f64
    }

    /// Fraction of elapsed time the server was busy.
    pub fn utilization(&self) -> f64 {
        if self.final_clock > 0.0 {
            self.total_service_time / self.final_clock
        } else {
            0.0
        }
    }
}
