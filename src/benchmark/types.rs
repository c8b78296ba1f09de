use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Execution strategy a benchmark row was measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Approach {
    Sequential,
    Parallel,
    Hybrid,
}

impl Approach {
    /// All strategies, in the order they run for each portion.
    pub const ALL: [Approach; 3] = [Approach::Sequential, Approach::Parallel, Approach::Hybrid];

    pub fn label(&self) -> &'static str {
        match self {
            Approach::Sequential => "Sequential",
            Approach::Parallel => "Parallel",
            Approach::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the summary table. Field names match the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    #[serde(rename = "Approach")]
    pub approach: Approach,
    /// Dataset fraction as a whole percentage, e.g. `25%`.
    #[serde(rename = "Portion")]
    pub portion: String,
    /// Wall-clock seconds.
    #[serde(rename = "Time")]
    pub time: f64,
    /// Records per second; 0 when no time elapsed.
    #[serde(rename = "Throughput")]
    pub throughput: f64,
    /// Seconds per record; 0 for an empty input.
    #[serde(rename = "Latency")]
    pub latency: f64,
}

impl BenchmarkResult {
    pub fn new(approach: Approach, portion: f64, duration: Duration, throughput: f64, latency: f64) -> Self {
        Self {
            approach,
            portion: portion_label(portion),
            time: duration.as_secs_f64(),
            throughput,
            latency,
        }
    }

    /// The portion as an integer percentage, if the label is well formed.
    pub fn portion_percent(&self) -> Option<u32> {
        self.portion.trim_end_matches('%').trim().parse().ok()
    }
}

/// Percentage label of a dataset fraction, truncated toward zero (`0.333` -> `33%`).
pub fn portion_label(portion: f64) -> String {
    format!("{}%", (portion * 100.0) as u32)
}

/// Number of leading records a fraction selects out of `total`, truncated toward zero.
pub fn portion_len(total: usize, portion: f64) -> usize {
    let len = (total as f64 * portion.clamp(0.0, 1.0)) as usize;
    len.min(total)
}

/// Which numeric column a chart series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Time,
    Throughput,
    Latency,
}

impl Metric {
    pub fn of(&self, result: &BenchmarkResult) -> f64 {
        match self {
            Metric::Time => result.time,
            Metric::Throughput => result.throughput,
            Metric::Latency => result.latency,
        }
    }
}
