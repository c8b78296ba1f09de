use crate::analytics::types::TagList;
use tokio::time::Instant;

/// Tags of one accepted record, stamped with the cycle time it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRecord {
    pub timestamp: Instant,
    pub tags: TagList,
}

/// What one poll cycle saw and the tallies after it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowReport {
    /// 1-based cycle number within the session.
    pub cycle: u64,
    /// Raw records returned by the poll.
    pub fetched: usize,
    /// Records that decoded and carried at least one tag.
    pub accepted: usize,
    /// Records dropped because they failed to decode.
    pub skipped: usize,
    /// Records evicted from the window this cycle.
    pub evicted: usize,
    /// Records left in the window after eviction.
    pub window_len: usize,
    pub all_time_top: Vec<(String, u64)>,
    pub window_top: Vec<(String, u64)>,
}

/// Totals of a finished session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub cycles: u64,
    pub accepted: usize,
    pub skipped: usize,
    pub all_time_top: Vec<(String, u64)>,
    pub window_top: Vec<(String, u64)>,
}
