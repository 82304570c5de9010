use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit-trail entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub reason: String,
}

impl AssessmentEntry {
    pub fn new(timestamp: DateTime<Utc>, score: f64, reason: impl Into<String>) -> Self {
        Self {
            timestamp,
            score,
            reason: reason.into(),
        }
    }
}

/// FIFO history capped at `max_entries`. The newest entry is always kept;
/// the oldest are evicted first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedHistory<T> {
    entries: VecDeque<T>,
    max_entries: usize,
}

impl<T> BoundedHistory<T> {
    /// A cap of zero is raised to one so the newest entry always survives.
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(64)),
            max_entries,
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_back(entry);
        self.evict();
    }

    /// Change the cap, evicting the oldest entries if the history is now too long.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        self.evict();
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    fn evict(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut history = BoundedHistory::new(3);
        for i in 0..5 {
            history.push(i);
        }
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(history.last(), Some(&4));
    }

    #[test]
    fn shrinking_cap_truncates() {
        let mut history = BoundedHistory::new(10);
        for i in 0..6 {
            history.push(i);
        }
        history.set_max_entries(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn zero_cap_keeps_newest() {
        let mut history = BoundedHistory::new(0);
        history.push("a");
        history.push("b");
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), Some(&"b"));
    }
}
