//! Batch Analytics Module
//!
//! Tag frequency and sentiment statistics over an in-memory record batch, computed
//! with three interchangeable execution strategies whose counters must agree.
//!
//! ## Submodules
//! - **`tokenizer`**: Strict parser turning a tag blob into normalized tags.
//! - **`sequential`**: Single-threaded baseline and the shared per-chunk counting loop.
//! - **`partitioned`**: Round-robin partitioning over isolated blocking workers, merged after a barrier.
//! - **`sentiment`**: Keyword-based positive/negative tally.
//! - **`hybrid`**: Partitioned tags and sentiment as two concurrent tasks over one batch.
//! - **`types`**: Counters, tallies and the `Measured` instrumentation wrapper.

pub mod hybrid;
pub mod partitioned;
pub mod sentiment;
pub mod sequential;
pub mod tokenizer;
pub mod types;

pub use hybrid::{HybridAggregator, HybridOutput};
pub use partitioned::PartitionedAggregator;
pub use sentiment::SentimentClassifier;
pub use sequential::SequentialAggregator;
pub use tokenizer::extract_tags;
pub use types::{FrequencyCounter, Measured, SentimentTally, TagList};

#[cfg(test)]
mod tests;

/// Human-readable cause of a failed worker or task.
pub(crate) fn join_error_reason(err: tokio::task::JoinError) -> String {
    if err.is_cancelled() {
        return "cancelled".to_string();
    }

    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}
