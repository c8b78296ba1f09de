//! Benchmark Driver
//!
//! Feeds growing leading slices of the dataset to the three tag strategies and
//! records one summary row per successful run.

use super::report::SummaryTable;
use super::types::{Approach, BenchmarkResult, portion_label, portion_len};
use crate::analytics::{HybridAggregator, PartitionedAggregator, SequentialAggregator};
use crate::config::{BenchmarkConfig, TOP_N};
use crate::storage::records::tag_blobs;
use crate::storage::types::{CONTENT_TYPE_CSV, TweetRow};
use crate::storage::{BlobStore, decode_rows};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    portions: Vec<f64>,
    top_n: usize,
    sequential: SequentialAggregator,
    partitioned: PartitionedAggregator,
    hybrid: HybridAggregator,
}

impl BenchmarkRunner {
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self::with_aggregator(
            config.portions.clone(),
            PartitionedAggregator::new(config.worker_count),
        )
    }

    /// Runner whose Parallel and Hybrid runs use `partitioned`.
    pub fn with_aggregator(portions: Vec<f64>, partitioned: PartitionedAggregator) -> Self {
        Self {
            portions,
            top_n: TOP_N,
            sequential: SequentialAggregator::new(),
            partitioned,
            hybrid: HybridAggregator::new(partitioned),
        }
    }

    /// Runs every strategy on every portion of `rows`.
    ///
    /// A failed run is logged and leaves no row; the remaining runs still happen.
    pub async fn run(&self, rows: &[TweetRow]) -> SummaryTable {
        let mut table = SummaryTable::new();

        for &portion in &self.portions {
            let part = &rows[..portion_len(rows.len(), portion)];
            let tags_data = tag_blobs(part);
            tracing::info!(
                "Running mode on {} of records ({} rows, {} tag blobs)",
                portion_label(portion),
                part.len(),
                tags_data.len()
            );

            let solo = self.sequential.run(&tags_data);
            tracing::info!(
                "Top {} tags (Sequential): {:?}",
                self.top_n,
                solo.output.most_common(self.top_n)
            );
            table.push(BenchmarkResult::new(
                Approach::Sequential,
                portion,
                solo.duration,
                solo.throughput,
                solo.latency,
            ));

            match self.partitioned.run(&tags_data).await {
                Ok(multi) => {
                    tracing::info!(
                        "Top {} tags (Parallel): {:?}",
                        self.top_n,
                        multi.output.most_common(self.top_n)
                    );
                    table.push(BenchmarkResult::new(
                        Approach::Parallel,
                        portion,
                        multi.duration,
                        multi.throughput,
                        multi.latency,
                    ));
                }
                Err(e) => tracing::error!("Parallel run on {} failed: {}", portion_label(portion), e),
            }

            match self.hybrid.run(part).await {
                Ok(combined) => {
                    tracing::info!(
                        "Sentiment counts (Hybrid): {:?}",
                        combined.output.moodset.output.entries()
                    );
                    table.push(BenchmarkResult::new(
                        Approach::Hybrid,
                        portion,
                        combined.duration,
                        combined.throughput,
                        combined.latency,
                    ));
                }
                Err(e) => tracing::error!("Hybrid run on {} failed: {}", portion_label(portion), e),
            }
        }

        table
    }
}

/// Loads the dataset from `store`, benchmarks it and publishes the summary table.
pub async fn run_benchmark<S>(store: &S, config: &BenchmarkConfig) -> Result<SummaryTable>
where
    S: BlobStore + ?Sized,
{
    let bytes = store
        .read(&config.input)
        .await
        .with_context(|| format!("failed to read {}", config.input))?;
    let rows = decode_rows(&bytes)?;
    tracing::info!("Loaded {} rows from {}", rows.len(), config.input);

    let table = BenchmarkRunner::new(config).run(&rows).await;

    let csv = table.to_csv()?;
    store
        .write(&config.output, csv, CONTENT_TYPE_CSV)
        .await
        .with_context(|| format!("failed to publish {}", config.output))?;

    for (approach, avg) in table.average_time_by_approach() {
        tracing::info!("Average time ({}): {:.6}s", approach, avg);
    }
    Ok(table)
}
