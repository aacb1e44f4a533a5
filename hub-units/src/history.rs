//! Recent conversions, kept in memory only

use std::collections::VecDeque;
use crate::convert::ConversionResult;

/// Bounded most-recent-first list of conversion results
#[derive(Debug, Clone)]
pub struct ConversionHistory {
    entries: VecDeque<ConversionResult>,
    capacity: usize,
}

impl ConversionHistory {
    pub fn new(capacity: usize) -> Self {
        ConversionHistory {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Record a result, evicting the oldest entry when full
    pub fn record(&mut self, result: ConversionResult) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(result);
    }

    /// Up to `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<&ConversionResult> {
        self.entries.iter().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
