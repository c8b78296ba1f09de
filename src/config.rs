//! Runtime Configuration
//!
//! Plain settings structs for each command. Defaults point at the stock dataset
//! and stream; the binary overrides individual fields from command-line flags.

use std::time::Duration;

/// Records pulled from the feed per poll.
pub const POLL_BATCH_SIZE: usize = 10;
/// Pause between two poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Entries shown in each top-N report.
pub const TOP_N: usize = 5;

/// Number of workers used by the partitioned strategy when none is given.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Locator of the tweet CSV inside the store.
    pub input: String,
    /// Locator the summary table is written to.
    pub output: String,
    /// Fractions of the dataset to benchmark, in run order.
    pub portions: Vec<f64>,
    pub worker_count: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            input: "covid_dataset/covid19_tweets.csv".to_string(),
            output: "benchmarks/processing_results.csv".to_string(),
            portions: vec![0.25, 0.5, 0.75, 1.0],
            worker_count: default_worker_count(),
        }
    }
}

/// Settings for one sliding-window streaming session.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub stream_name: String,
    pub window_size: Duration,
    /// Wall-clock cap on the whole session.
    pub run_duration: Duration,
    pub poll_batch_size: usize,
    pub poll_interval: Duration,
    pub top_n: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            stream_name: "covid_stream".to_string(),
            window_size: Duration::from_secs(5),
            run_duration: Duration::from_secs(60),
            poll_batch_size: POLL_BATCH_SIZE,
            poll_interval: POLL_INTERVAL,
            top_n: TOP_N,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub input: String,
    pub stream_name: String,
    pub partition_key: String,
    pub delay_between: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            input: "covid_dataset/covid19_tweets.csv".to_string(),
            stream_name: "covid_stream".to_string(),
            partition_key: "partition_tweet".to_string(),
            delay_between: Duration::from_secs(1),
        }
    }
}
