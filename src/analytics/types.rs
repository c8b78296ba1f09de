use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Normalized tag tokens extracted from one tag blob, in source order.
pub type TagList = Vec<String>;

/// Signature of a tag extractor. Workers receive it by value so it must be a plain fn.
pub type ExtractFn = fn(&str) -> TagList;

/// Occurrence count per tag.
///
/// `merge` sums counts key by key, so partial counters built over disjoint slices
/// combine into the same result regardless of how the input was split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCounter {
    counts: HashMap<String, u64>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence for every tag yielded.
    pub fn update<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            *self.counts.entry(tag.into()).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: FrequencyCounter) {
        for (tag, count) in other.counts {
            *self.counts.entry(tag).or_insert(0) += count;
        }
    }

    pub fn get(&self, tag: &str) -> u64 {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// The `k` most frequent tags, highest first. Ties are ordered by tag.
    pub fn most_common(&self, k: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(tag, count)| (tag.clone(), *count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(k);
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        counter.update(iter);
        counter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Count of texts per sentiment label. A text lands in at most one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: u64,
    pub negative: u64,
}

impl SentimentTally {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Label/count pairs in report order.
    pub fn entries(&self) -> [(&'static str, u64); 2] {
        [("positive", self.positive), ("negative", self.negative)]
    }
}

/// An aggregation result together with its wall-clock instrumentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measured<T> {
    pub output: T,
    pub duration: Duration,
    /// Records per second; 0 when `duration` is zero.
    pub throughput: f64,
    /// Seconds per record; 0 when no records were processed.
    pub latency: f64,
}

impl<T> Measured<T> {
    /// Wraps `output` with metrics derived from `records` processed in `elapsed`.
    pub fn timed(output: T, records: usize, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let throughput = if secs > 0.0 {
            records as f64 / secs
        } else {
            0.0
        };
        let latency = if records > 0 {
            secs / records as f64
        } else {
            0.0
        };

        Self {
            output,
            duration: elapsed,
            throughput,
            latency,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

impl<T: Default> Measured<T> {
    /// Result for zero-length input: empty output and all metrics zero.
    pub fn empty() -> Self {
        Self::timed(T::default(), 0, Duration::ZERO)
    }
}
