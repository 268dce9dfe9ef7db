//! Reveal lifecycle events drained by the host after visibility passes.
//!
//! The latch invariant makes reveal a one-time edge per section, so the
//! stage emits exactly one event per section, the first pass after that
//! section's latch sets. Hosts poll with [`crate::Stage::drain_events`]
//! and react (start transitions, kick off lazy loads).

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::RegionId;

/// Emitted once per section when it first enters the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEvent {
    /// Name of the revealed section.
    pub section: String,
    /// The region whose threshold crossing triggered the reveal.
    pub region: RegionId,
}

/// FIFO queue of pending reveal events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<RevealEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<RevealEvent> {
        self.events.pop_front()
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&RevealEvent> {
        self.events.front()
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = RevealEvent> + '_ {
        self.events.drain(..)
    }

    /// Clear all pending events without processing them.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
