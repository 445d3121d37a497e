//! Bounded recent-history filter.

use std::collections::VecDeque;

/// Default number of recently shown compliments remembered.
pub const DEFAULT_HISTORY_SIZE: usize = 5;

/// The last few compliments shown, newest first.
///
/// Not persisted: a fresh instance starts empty. Owned by a single
/// generator, so mutation takes `&mut self` and no locking is involved.
#[derive(Debug, Clone)]
pub struct RecentHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl RecentHistory {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// `usize::MAX` effectively means unbounded. Storage grows on demand.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Push `compliment` to the front, dropping the oldest when full.
    pub fn record(&mut self, compliment: impl Into<String>) {
        self.entries.push_front(compliment.into());
        self.entries.truncate(self.capacity);
    }

    /// Whether `compliment` was shown recently.
    pub fn contains(&self, compliment: &str) -> bool {
        self.entries.iter().any(|c| c == compliment)
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
