//! Append-only in-memory event log.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// One entry of an [`EventLog`]: the event plus its 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recorded<E> {
    pub sequence: u64,
    pub event: E,
}

/// Ordered history of applied events.
///
/// - No IO
/// - Sequence numbers start at 1 and never repeat
/// - Readers remember the last sequence they saw and ask for `since(seq)`
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    entries: Vec<Recorded<E>>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return its sequence number.
    pub fn record(&mut self, event: E) -> u64 {
        let sequence = self.last_sequence() + 1;
        self.entries.push(Recorded { sequence, event });
        sequence
    }

    /// Sequence of the newest entry (0 when empty).
    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map(|r| r.sequence).unwrap_or(0)
    }

    /// Entries strictly after `sequence`, oldest first.
    pub fn since(&self, sequence: u64) -> &[Recorded<E>] {
        let start = self.entries.partition_point(|r| r.sequence <= sequence);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[Recorded<E>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
