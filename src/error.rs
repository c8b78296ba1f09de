//! Error Types
//!
//! Typed failures surfaced by the library. Recoverable conditions (malformed tag
//! literals, undecodable streamed records, empty input) never reach these types;
//! they are absorbed where they happen.

use thiserror::Error;

/// Failure of a batch aggregation call. Fatal to that call only.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("partition worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    #[error("{task} task failed: {reason}")]
    TaskFailure { task: &'static str, reason: String },
}

/// Failure talking to the pull/push feed. Fatal to a streaming session.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot reach feed: {0}")]
    Connection(String),

    #[error("stream not found: {0}")]
    StreamNotFound(String),

    #[error("stream {0} has no shards")]
    NoShards(String),

    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("feed returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Connection(err.to_string())
    }
}

/// Failure reading or writing bulk records and results.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {locator}: {source}")]
    Io {
        locator: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid locator: {0}")]
    InvalidLocator(String),
}
