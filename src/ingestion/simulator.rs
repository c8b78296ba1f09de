//! Live Tweet Producer
//!
//! Replays dataset rows into a push feed at a fixed pace, imitating a live stream
//! for the sliding-window session to consume.

use super::types::TweetPayload;
use crate::config::SimulatorConfig;
use crate::feed::PushFeed;
use crate::storage::{BlobStore, decode_rows, types::TweetRow};

use anyhow::{Context, Result};

/// Publishes every row that has hashtags, pausing `delay_between` after each send.
///
/// Returns the number of records sent. The first failed put aborts the replay.
pub async fn replay_rows<F>(feed: &F, rows: &[TweetRow], config: &SimulatorConfig) -> Result<usize>
where
    F: PushFeed + ?Sized,
{
    let tweet_records: Vec<&TweetRow> = rows.iter().filter(|row| row.hashtags.is_some()).collect();

    tracing::info!(
        "Starting to send {} tweets to stream: {}",
        tweet_records.len(),
        config.stream_name
    );

    for (idx, row) in tweet_records.iter().enumerate() {
        let payload = TweetPayload::from_row(row).encode()?;
        feed.put(&config.stream_name, payload, &config.partition_key)
            .await
            .with_context(|| format!("failed to send tweet #{}", idx + 1))?;

        tracing::debug!("Sent tweet #{} to the stream", idx + 1);
        tokio::time::sleep(config.delay_between).await;
    }

    tracing::info!("All {} tweets have been sent", tweet_records.len());
    Ok(tweet_records.len())
}

/// Loads the dataset from `store` and replays it into `feed`.
pub async fn run_simulator<S, F>(store: &S, feed: &F, config: &SimulatorConfig) -> Result<usize>
where
    S: BlobStore + ?Sized,
    F: PushFeed + ?Sized,
{
    let bytes = store
        .read(&config.input)
        .await
        .with_context(|| format!("failed to read {}", config.input))?;
    let rows = decode_rows(&bytes)?;

    replay_rows(feed, &rows, config).await
}
