//! Hybrid Execution
//!
//! Runs partitioned tag counting and sentiment classification over the same batch
//! as two concurrent tasks. Each task owns its own output slot (its join handle);
//! the caller sees both results only after both tasks have finished.

use super::join_error_reason;
use super::partitioned::PartitionedAggregator;
use super::sentiment::SentimentClassifier;
use super::types::{FrequencyCounter, Measured, SentimentTally};
use crate::error::AggregationError;
use crate::storage::types::TweetRow;

use std::time::Instant;

/// Output of both hybrid tasks, one slot each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HybridOutput {
    pub tagset: Measured<FrequencyCounter>,
    pub moodset: Measured<SentimentTally>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HybridAggregator {
    partitioned: PartitionedAggregator,
    classifier: SentimentClassifier,
}

impl HybridAggregator {
    pub fn new(partitioned: PartitionedAggregator) -> Self {
        Self {
            partitioned,
            classifier: SentimentClassifier::new(),
        }
    }

    /// Runs both tasks and waits for both.
    ///
    /// The overall metrics span the concurrent execution and are computed against
    /// the full batch length, not against either task's own input.
    pub async fn run(
        &self,
        batch: &[TweetRow],
    ) -> Result<Measured<HybridOutput>, AggregationError> {
        if batch.is_empty() {
            return Ok(Measured::empty());
        }

        let tag_area: Vec<String> = batch.iter().filter_map(|row| row.hashtags.clone()).collect();
        let desc_area: Vec<String> = batch
            .iter()
            .filter_map(|row| row.user_description.clone())
            .collect();

        tracing::debug!(
            "Hybrid run: {} tag blobs, {} descriptions out of {} rows",
            tag_area.len(),
            desc_area.len(),
            batch.len()
        );

        let partitioned = self.partitioned;
        let classifier = self.classifier;

        let start_time = Instant::now();
        let tag_task = tokio::spawn(async move { partitioned.run(&tag_area).await });
        let mood_task = tokio::task::spawn_blocking(move || classifier.run(&desc_area));
        let (tag_joined, mood_joined) = tokio::join!(tag_task, mood_task);
        let overall_time = start_time.elapsed();

        let tagset = tag_joined.map_err(|e| AggregationError::TaskFailure {
            task: "tagset",
            reason: join_error_reason(e),
        })??;
        let moodset = mood_joined.map_err(|e| AggregationError::TaskFailure {
            task: "moodset",
            reason: join_error_reason(e),
        })?;

        Ok(Measured::timed(
            HybridOutput { tagset, moodset },
            batch.len(),
            overall_time,
        ))
    }
}
