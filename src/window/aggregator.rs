//! Streaming Tag Aggregator
//!
//! Consumes a pull feed for a bounded session, keeping two tallies:
//! an all-time counter that only grows, and a counter over the records that
//! arrived within the last `window_size`.
//!
//! ## Cycle
//! 1. **Poll**: Fetch up to `poll_batch_size` records and advance the cursor.
//! 2. **Ingest**: Decode each record (skip on failure), fold its tags into the
//!    all-time counter and append it to the window.
//! 3. **Evict**: Drop expired records from the front of the window.
//! 4. **Recount**: Rebuild the window counter from the surviving records.
//! 5. **Report**: Emit the top entries of both counters.
//! 6. **Sleep**: Wait `poll_interval`.
//!
//! Any feed error ends the session immediately; there is no retry.

use super::sliding::SlidingWindow;
use super::types::{SessionSummary, WindowReport};
use crate::analytics::types::FrequencyCounter;
use crate::config::StreamConfig;
use crate::error::FeedError;
use crate::feed::PullFeed;
use crate::feed::types::StartPosition;
use crate::ingestion::types::TweetPayload;

use tokio::time::Instant;

pub struct SlidingWindowAggregator {
    config: StreamConfig,
    all_time: FrequencyCounter,
    window: SlidingWindow,
    cycles: u64,
    accepted: usize,
    skipped: usize,
}

impl SlidingWindowAggregator {
    pub fn new(config: StreamConfig) -> Self {
        Self {
            config,
            all_time: FrequencyCounter::new(),
            window: SlidingWindow::new(),
            cycles: 0,
            accepted: 0,
            skipped: 0,
        }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn all_time(&self) -> &FrequencyCounter {
        &self.all_time
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    /// Runs one session against `feed` until `run_duration` elapses.
    ///
    /// `on_report` is called once per cycle, after the tallies are updated.
    pub async fn run<F, R>(&mut self, feed: &F, mut on_report: R) -> Result<SessionSummary, FeedError>
    where
        F: PullFeed + ?Sized,
        R: FnMut(&WindowReport),
    {
        let stream = self.config.stream_name.clone();

        let shard = feed
            .describe(&stream)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::NoShards(stream.clone()))?;
        let mut cursor = feed
            .open_cursor(&stream, &shard, StartPosition::Latest)
            .await?;

        tracing::info!("Reading from stream: {} ({})", stream, shard.0);
        let start_time = Instant::now();

        while start_time.elapsed() < self.config.run_duration {
            let current_time = Instant::now();
            let response = feed.poll(&cursor, self.config.poll_batch_size).await?;
            cursor = response.next_cursor;

            let report = self.apply_batch(current_time, &response.records);
            tracing::info!(
                "Top {} hashtags (all-time): {:?}",
                self.config.top_n,
                report.all_time_top
            );
            tracing::info!(
                "Top {} hashtags (last {}s): {:?}",
                self.config.top_n,
                self.config.window_size.as_secs_f64(),
                report.window_top
            );
            on_report(&report);

            tokio::time::sleep(self.config.poll_interval).await;
        }

        tracing::info!(
            "Stream session finished after {} cycles ({} accepted, {} skipped)",
            self.cycles,
            self.accepted,
            self.skipped
        );
        Ok(self.summary())
    }

    /// Applies one polled batch observed at `now`: ingest, evict, recount, report.
    pub fn apply_batch<B: AsRef<[u8]>>(&mut self, now: Instant, records: &[B]) -> WindowReport {
        self.cycles += 1;
        let mut accepted = 0;
        let mut skipped = 0;

        for record in records {
            let tweet = match TweetPayload::decode(record.as_ref()) {
                Ok(tweet) => tweet,
                Err(e) => {
                    tracing::warn!("Could not read a tweet record: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            let tags = tweet.tags();
            if tags.is_empty() {
                continue;
            }
            self.all_time.update(&tags);
            self.window.push(now, tags);
            accepted += 1;
        }

        let evicted = self.window.evict_expired(now, self.config.window_size);
        let window_counter = self.window.tally();

        self.accepted += accepted;
        self.skipped += skipped;

        WindowReport {
            cycle: self.cycles,
            fetched: records.len(),
            accepted,
            skipped,
            evicted,
            window_len: self.window.len(),
            all_time_top: self.all_time.most_common(self.config.top_n),
            window_top: window_counter.most_common(self.config.top_n),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            cycles: self.cycles,
            accepted: self.accepted,
            skipped: self.skipped,
            all_time_top: self.all_time.most_common(self.config.top_n),
            window_top: self.window.tally().most_common(self.config.top_n),
        }
    }
}
