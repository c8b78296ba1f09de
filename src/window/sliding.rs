//! Time-Bounded Record Window
//!
//! A FIFO of `TimedRecord`s kept in ascending timestamp order. Records enter at
//! the back and leave only from the front, once they are older than the window.

use super::types::TimedRecord;
use crate::analytics::types::{FrequencyCounter, TagList};

use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct SlidingWindow {
    records: VecDeque<TimedRecord>,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the back.
    ///
    /// A timestamp earlier than the current back is raised to it so the window
    /// stays sorted.
    pub fn push(&mut self, timestamp: Instant, tags: TagList) {
        let timestamp = match self.records.back() {
            Some(last) if last.timestamp > timestamp => last.timestamp,
            _ => timestamp,
        };
        self.records.push_back(TimedRecord { timestamp, tags });
    }

    /// Pops records from the front while they are more than `window_size` older
    /// than `now`. Returns how many were removed.
    pub fn evict_expired(&mut self, now: Instant, window_size: Duration) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.records.front() {
            if now.saturating_duration_since(front.timestamp) <= window_size {
                break;
            }
            self.records.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Counts the tags of every record currently held, from scratch.
    pub fn tally(&self) -> FrequencyCounter {
        let mut counter = FrequencyCounter::new();
        for record in &self.records {
            counter.update(&record.tags);
        }
        counter
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn front(&self) -> Option<&TimedRecord> {
        self.records.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimedRecord> {
        self.records.iter()
    }
}
