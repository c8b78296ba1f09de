//! Benchmark Module
//!
//! Compares the sequential, partitioned and hybrid strategies over growing
//! portions of the tweet dataset and publishes the comparison as a CSV table.
//!
//! ## Submodules
//! - **`runner`**: Portion loop, per-strategy runs and publishing through a `BlobStore`.
//! - **`report`**: The summary table, its CSV form and the chart series derived from it.
//! - **`types`**: Result rows, approach labels and portion arithmetic.

pub mod report;
pub mod runner;
pub mod types;

pub use report::SummaryTable;
pub use runner::{BenchmarkRunner, run_benchmark};
pub use types::{Approach, BenchmarkResult, Metric};
