//! Partitioned Tag Counting
//!
//! Splits the input into `worker_count` round-robin slices, counts each slice on
//! its own blocking worker and merges the partial counters once every worker has
//! returned.
//!
//! ## Guarantees
//! - **Isolation**: each worker owns its slice and its counter; nothing is shared
//!   while they run.
//! - **Barrier**: the merge starts only after all workers completed.
//! - **All-or-nothing**: if any worker fails, the call fails and no partial
//!   counter escapes.
//! - **Determinism**: the merged counter equals the sequential one for every
//!   `worker_count`.

use super::join_error_reason;
use super::sequential::count_chunk;
use super::tokenizer::extract_tags;
use super::types::{ExtractFn, FrequencyCounter, Measured};
use crate::config::default_worker_count;
use crate::error::AggregationError;

use std::time::Instant;

/// Deals `items` into `parts` slices: slice `i` holds every item whose index is `i mod parts`.
///
/// Slices are disjoint, cover the input exactly and differ in length by at most one.
/// Zero `parts` yields no slices.
pub fn partition_round_robin<T: Clone>(items: &[T], parts: usize) -> Vec<Vec<T>> {
    if parts == 0 {
        return Vec::new();
    }

    let mut slices: Vec<Vec<T>> = (0..parts)
        .map(|_| Vec::with_capacity(items.len() / parts + 1))
        .collect();

    for (idx, item) in items.iter().enumerate() {
        slices[idx % parts].push(item.clone());
    }

    slices
}

#[derive(Debug, Clone, Copy)]
pub struct PartitionedAggregator {
    worker_count: usize,
    extract: ExtractFn,
}

impl PartitionedAggregator {
    pub fn new(worker_count: usize) -> Self {
        Self::with_extractor(worker_count, extract_tags)
    }

    /// Uses `extract` in place of the standard tag extractor inside every worker.
    pub fn with_extractor(worker_count: usize, extract: ExtractFn) -> Self {
        Self {
            worker_count,
            extract,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Counts tags across all workers. Timing covers partition, dispatch and merge.
    pub async fn run(
        &self,
        blobs: &[String],
    ) -> Result<Measured<FrequencyCounter>, AggregationError> {
        if self.worker_count == 0 {
            return Err(AggregationError::InvalidWorkerCount);
        }
        if blobs.is_empty() {
            return Ok(Measured::empty());
        }

        let begin = Instant::now();
        let slices = partition_round_robin(blobs, self.worker_count);
        let extract = self.extract;

        tracing::debug!(
            "Dispatching {} blobs to {} workers",
            blobs.len(),
            self.worker_count
        );

        let handles: Vec<_> = slices
            .into_iter()
            .enumerate()
            .map(|(worker_id, slice)| {
                tokio::task::spawn_blocking(move || {
                    tracing::trace!("Worker {} counting {} blobs", worker_id, slice.len());
                    count_chunk(&slice, extract)
                })
            })
            .collect();

        let partials = futures::future::join_all(handles).await;

        let mut combined = FrequencyCounter::new();
        for (worker, partial) in partials.into_iter().enumerate() {
            match partial {
                Ok(counter) => combined.merge(counter),
                Err(e) => {
                    let reason = join_error_reason(e);
                    tracing::error!("Partition worker {} failed: {}", worker, reason);
                    return Err(AggregationError::WorkerFailure { worker, reason });
                }
            }
        }

        let elapsed = begin.elapsed();
        Ok(Measured::timed(combined, blobs.len(), elapsed))
    }
}

impl Default for PartitionedAggregator {
    fn default() -> Self {
        Self::new(default_worker_count())
    }
}
