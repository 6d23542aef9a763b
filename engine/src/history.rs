// Bounded history log: newest first, oldest evicted past the cap.

use shared::models::HistoryEntry;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HistoryLog {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Prepends a completed calculation and evicts the oldest entries beyond
    /// the cap.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.entries
            .push_front(HistoryEntry::new(expression, result));
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index 0 is the most recent entry.
    pub fn entry(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Newest-first iteration for the side panel.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = HistoryLog::new();
        log.record("1 + 1", "2");
        log.record("2 + 2", "4");
        assert_eq!(log.entry(0).unwrap().expression, "2 + 2");
        assert_eq!(log.entry(1).unwrap().expression, "1 + 1");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = HistoryLog::new();
        for i in 0..15 {
            log.record(format!("{} + 0", i), format!("{}", i));
        }
        assert_eq!(log.len(), 10);
        // The retained entries are the last 10 recorded, newest first.
        let results: Vec<&str> = log.entries().map(|e| e.result.as_str()).collect();
        let expected: Vec<String> = (5..15).rev().map(|i| i.to_string()).collect();
        assert_eq!(results, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        for i in 0..7 {
            log.record(format!("{}", i), format!("{}", i));
        }
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_custom_capacity() {
        let mut log = HistoryLog::with_capacity(3);
        for i in 0..5 {
            log.record(format!("{}", i), format!("{}", i));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.entry(0).unwrap().result, "4");
        assert_eq!(log.entry(2).unwrap().result, "2");
    }

    #[test]
    fn test_out_of_range_entry() {
        let log = HistoryLog::new();
        assert!(log.entry(0).is_none());
    }
}
