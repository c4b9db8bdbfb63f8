//! Per-(method, path) queue of mock entries.

use crate::types::entry::{MockEntry, MockResponse};
use crate::types::id::MockId;
use std::collections::VecDeque;

/// Ordered pending entries for a single (method, path) pair.
///
/// The id identifies the queue, not the entry: entries appended later share it.
#[derive(Debug, Clone)]
pub struct MockQueue {
    id: MockId,
    entries: VecDeque<MockEntry>,
}

impl MockQueue {
    pub fn new(id: MockId, first: MockEntry) -> Self {
        Self {
            id,
            entries: VecDeque::from([first]),
        }
    }

    pub fn id(&self) -> MockId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: MockEntry) {
        self.entries.push_back(entry);
    }

    /// Serve the front entry, dropping it once its uses run out.
    pub fn consume(&mut self) -> Option<MockResponse> {
        let front = self.entries.front_mut()?;
        let (response, exhausted) = front.serve();
        if exhausted {
            self.entries.pop_front();
        }
        Some(response)
    }
}
