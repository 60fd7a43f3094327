//! Deferred transitions on the simulated clock.
//!
//! Wave starts and agent removals are queued as `{fire_at, seq, action}`
//! entries and fired from inside `EncounterEngine::update`, so they freeze
//! with everything else while the encounter is paused.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bastion_core::types::AgentId;

/// A transition waiting for the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    StartNextWave,
    RemoveAgent(AgentId),
}

#[derive(Debug, Clone, Copy)]
struct Deferred {
    fire_at: f64,
    /// Insertion order; breaks ties between equal `fire_at`.
    seq: u64,
    action: DeferredAction,
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Deferred {}

impl PartialOrd for Deferred {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Deferred {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .total_cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-queue of deferred transitions keyed by simulated fire time.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    heap: BinaryHeap<Reverse<Deferred>>,
    next_seq: u64,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire once the clock reaches `fire_at`.
    pub fn schedule(&mut self, fire_at: f64, action: DeferredAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Deferred {
            fire_at,
            seq,
            action,
        }));
    }

    /// Pop the earliest entry due at `now`, if any.
    pub fn pop_due(&mut self, now: f64) -> Option<DeferredAction> {
        match self.heap.peek() {
            Some(Reverse(next)) if next.fire_at <= now => {
                self.heap.pop().map(|Reverse(entry)| entry.action)
            }
            _ => None,
        }
    }

    /// Drop every pending entry for `action`. Returns how many were dropped.
    pub fn cancel(&mut self, action: DeferredAction) -> usize {
        let before = self.heap.len();
        self.heap.retain(|Reverse(entry)| entry.action != action);
        before - self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending transition.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
