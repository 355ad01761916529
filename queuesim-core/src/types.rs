//! Core type definitions and newtypes for the simulation engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::SimTime;

/// Sequence number assigned to an event when it enters the event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// Discriminant used to dispatch an event to its handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival => f.write_str("ARRIVAL"),
            EventKind::Departure => f.write_str("DEPARTURE"),
        }
    }
}

/// A scheduled state change. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    time: SimTime,
    kind: EventKind,
}

impl Event {
    pub fn new(time: SimTime, kind: EventKind) -> Self {
        Self { time, kind }
    }

    pub fn arrival(time: SimTime) -> Self {
        Self::new(time, EventKind::Arrival)
    }

    pub fn departure(time: SimTime) -> Self {
        Self::new(time, EventKind::Departure)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.time)
    }
}

/// Whether the server is currently attending a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServerState {
    #[default]
    Idle,
    Busy,
}

/// A customer waiting in line. Only the arrival time is needed to account
/// for its delay once it enters service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub arrival_time: SimTime,
}
