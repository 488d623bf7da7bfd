//! Bounded, newest-first buffer of recent roll batches.
//!
//! The engine itself keeps no history; front-ends that show recent rolls
//! own one of these.

use std::collections::VecDeque;

use super::roll::RollResult;

/// Default number of batches kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Recent roll batches, newest first.
#[derive(Debug, Clone)]
pub struct RollHistory {
    capacity: usize,
    batches: VecDeque<RollResult>,
}

impl RollHistory {
    /// An empty history holding at most `capacity` batches (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            batches: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a batch, evicting the oldest ones past capacity.
    pub fn push(&mut self, batch: RollResult) {
        self.batches.push_front(batch);
        self.batches.truncate(self.capacity);
    }

    /// Batches from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &RollResult> {
        self.batches.iter()
    }

    /// The most recent batch.
    pub fn latest(&self) -> Option<&RollResult> {
        self.batches.front()
    }

    /// Number of batches held.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Maximum number of batches held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget every batch.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
