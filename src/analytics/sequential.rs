use super::tokenizer::extract_tags;
use super::types::{ExtractFn, FrequencyCounter, Measured};

use std::time::Instant;

/// Counts every tag in `chunk`, in order. Shared by all tag strategies.
pub fn count_chunk<S: AsRef<str>>(chunk: &[S], extract: ExtractFn) -> FrequencyCounter {
    let mut bucket = FrequencyCounter::new();
    for blob in chunk {
        bucket.update(extract(blob.as_ref()));
    }
    bucket
}

/// Single-threaded baseline: one loop, one counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAggregator;

impl SequentialAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn run<S: AsRef<str>>(&self, blobs: &[S]) -> Measured<FrequencyCounter> {
        if blobs.is_empty() {
            return Measured::empty();
        }

        let begin = Instant::now();
        let bucket = count_chunk(blobs, extract_tags);
        let elapsed = begin.elapsed();

        tracing::debug!(
            "Sequential count over {} blobs found {} distinct tags in {:?}",
            blobs.len(),
            bucket.len(),
            elapsed
        );

        Measured::timed(bucket, blobs.len(), elapsed)
    }
}
