use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::time::SimTime;
use crate::types::{Event, EventId, EventKind};

/// Entry type stored in the event queue: the event plus the key it is
/// ordered by.
///
/// Entries are ordered by time first and by sequence number second, so
/// events that share a timestamp leave the queue in the order they entered
/// it, regardless of their kind.
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry {
    time: SimTime,
    id: EventId,
    event: Event,
}

impl QueueEntry {
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn event(&self) -> Event {
        self.event
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.id == other.id
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering for min-heap behavior in BinaryHeap
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Source of event sequence numbers.
///
/// Cloning the counter shares it: every clone hands out numbers from the
/// same sequence. Pass one counter to several queues with
/// [`EventQueue::with_counter`] when their events must be globally ordered.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    next: Rc<Cell<u64>>,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number that the next call to [`SequenceCounter::next_id`] returns.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.get()
    }

    /// Hand out the next sequence number.
    pub fn next_id(&self) -> EventId {
        let id = self.next.get();
        self.next.set(id + 1);
        EventId(id)
    }
}

/// Pending events of a simulation run, earliest first.
///
/// # Example
///
/// ```
/// # use queuesim_core::{Event, EventQueue, SimTime};
/// let mut queue = EventQueue::new();
/// queue.enqueue(Event::departure(SimTime::new(2.0).unwrap()));
/// queue.enqueue(Event::arrival(SimTime::new(1.0).unwrap()));
/// assert_eq!(queue.dequeue().unwrap().time().as_f64(), 1.0);
/// ```
#[derive(Debug, Default)]
pub struct EventQueue {
    entries: BinaryHeap<QueueEntry>,
    counter: SequenceCounter,
}

impl EventQueue {
    /// Create an empty queue with its own sequence counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue that draws sequence numbers from `counter`.
    pub fn with_counter(counter: SequenceCounter) -> Self {
        Self {
            entries: BinaryHeap::new(),
            counter,
        }
    }

    /// Returns a handle to the sequence counter used by this queue.
    #[must_use]
    pub fn counter(&self) -> SequenceCounter {
        self.counter.clone()
    }

    /// Inserts `event` and returns the sequence number it was assigned.
    pub fn enqueue(&mut self, event: Event) -> EventId {
        let id = self.counter.next_id();
        self.entries.push(QueueEntry {
            time: event.time(),
            id,
            event,
        });
        id
    }

    /// Removes and returns the earliest event or `None` if none are left.
    pub fn dequeue(&mut self) -> Option<Event> {
        self.entries.pop().map(|entry| entry.event)
    }

    /// Returns the next entry without removing it.
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.entries.peek()
    }

    /// Returns the time of the next event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.entries.peek().map(|entry| entry.time)
    }

    /// Drops every pending event. The sequence counter keeps counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of pending events of the given kind.
    pub fn pending(&self, kind: EventKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.event.kind() == kind)
            .count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t(value: f64) -> SimTime {
        SimTime::new(value).unwrap()
    }

    #[test]
    fn test_entry_cmp() {
        let entry = |time: f64, id: u64| QueueEntry {
            time: t(time),
            id: EventId(id),
            event: Event::arrival(t(time)),
        };

        // Earlier time is "greater" so the max-heap pops it first.
        assert_eq!(entry(0.0, 5).cmp(&entry(1.0, 0)), Ordering::Greater);
        assert_eq!(entry(1.0, 0).cmp(&entry(1.0, 1)), Ordering::Greater);
        assert_eq!(entry(2.0, 1).cmp(&entry(1.0, 3)), Ordering::Less);
        assert_eq!(entry(1.0, 1), entry(1.0, 1));
    }

    #[test]
    fn test_dequeue_orders_by_time() {
        let mut queue = EventQueue::new();
        for time in [5.0, 1.0, 3.0, 0.5, 4.0] {
            queue.enqueue(Event::arrival(t(time)));
        }
        assert_eq!(queue.len(), 5);

        let times: Vec<f64> = std::iter::from_fn(|| queue.dequeue())
            .map(|event| event.time().as_f64())
            .collect();
        assert_eq!(times, vec![0.5, 1.0, 3.0, 4.0, 5.0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_times_are_fifo_not_by_kind() {
        let mut queue = EventQueue::new();
        queue.enqueue(Event::arrival(t(3.0)));
        queue.enqueue(Event::departure(t(3.0)));
        queue.enqueue(Event::arrival(t(3.0)));
        queue.enqueue(Event::departure(t(1.0)));

        assert_eq!(queue.peek().unwrap().id(), EventId(3));
        let kinds: Vec<EventKind> = std::iter::from_fn(|| queue.dequeue())
            .map(|event| event.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Departure,
                EventKind::Arrival,
                EventKind::Departure,
                EventKind::Arrival
            ]
        );
    }

    #[test]
    fn test_empty_dequeue_returns_none() {
        let mut queue = EventQueue::new();
        assert!(queue.dequeue().is_none());
        assert!(queue.peek_time().is_none());

        queue.enqueue(Event::arrival(t(1.0)));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.dequeue().is_none());
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.enqueue(Event::arrival(t(1.0))), EventId(0));
        assert_eq!(queue.enqueue(Event::arrival(t(2.0))), EventId(1));
        queue.clear();
        assert_eq!(queue.enqueue(Event::arrival(t(0.0))), EventId(2));
        assert_eq!(queue.counter().peek(), 3);
    }

    #[test]
    fn test_shared_counter_across_queues() {
        let counter = SequenceCounter::new();
        let mut first = EventQueue::with_counter(counter.clone());
        let mut second = EventQueue::with_counter(counter.clone());

        assert_eq!(first.enqueue(Event::arrival(t(1.0))), EventId(0));
        assert_eq!(second.enqueue(Event::arrival(t(1.0))), EventId(1));
        assert_eq!(first.enqueue(Event::arrival(t(1.0))), EventId(2));
        assert_eq!(counter.peek(), 3);

        // Independent queues do not share numbering.
        let mut isolated = EventQueue::new();
        assert_eq!(isolated.enqueue(Event::arrival(t(1.0))), EventId(0));
    }

    #[test]
    fn test_pending_by_kind() {
        let mut queue = EventQueue::new();
        queue.enqueue(Event::arrival(t(1.0)));
        queue.enqueue(Event::departure(t(2.0)));
        queue.enqueue(Event::arrival(t(3.0)));

        assert_eq!(queue.pending(EventKind::Arrival), 2);
        assert_eq!(queue.pending(EventKind::Departure), 1);
    }
}
