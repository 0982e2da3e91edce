//! Cancelable deferred tasks on a virtual millisecond clock.
//!
//! Nothing here reads the wall clock. The owner moves time forward with
//! [`Scheduler::pop_due`] and [`Scheduler::advance_to`], which keeps every
//! timer-driven behavior reproducible in tests.

use std::collections::{BTreeMap, HashMap};

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A queue of events due at future points on a virtual clock.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: u64,
    next_id: u64,
    /// Keyed by (due, id) so iteration order is fire order.
    queue: BTreeMap<(u64, u64), E>,
    /// id -> due, for cancellation.
    due_of: HashMap<u64, u64>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            due_of: HashMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `event` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now.saturating_add(delay_ms);
        self.queue.insert((due, id), event);
        self.due_of.insert(id, due);
        log::debug!("timer {id} scheduled at {due}ms");
        TimerId(id)
    }

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// canceled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_of.remove(&id.0) {
            Some(due) => {
                self.queue.remove(&(due, id.0));
                log::debug!("timer {} canceled", id.0);
                true
            },
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_of.contains_key(&id.0)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest task due at or before `until_ms`.
    ///
    /// The clock moves to the task's due time (never backwards), so anything
    /// the caller schedules while handling it is relative to when it fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, E)> {
        let (&(due, id), _) = self.queue.first_key_value()?;
        if due > until_ms {
            return None;
        }
        let event = self.queue.remove(&(due, id))?;
        self.due_of.remove(&id);
        self.now = self.now.max(due);
        Some((TimerId(id), event))
    }

    /// Move the clock forward to `until_ms` without firing anything.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now = self.now.max(until_ms);
    }
}
