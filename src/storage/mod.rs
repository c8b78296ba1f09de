//! Bulk Storage Module
//!
//! The bulk record source and result sink the batch benchmark reads from and
//! publishes to.
//!
//! ## Core Concepts
//! - **Locator**: A store-relative name for one blob (e.g. `benchmarks/results.csv`).
//! - **BlobStore**: Byte-level `read`/`write`; the core never sees paths or buckets.
//! - **Rows**: The tweet CSV decoded into `TweetRow`s, keeping only the columns in use.

pub mod local;
pub mod records;
pub mod types;

use crate::error::StorageError;
use async_trait::async_trait;

pub use local::LocalStore;
pub use records::decode_rows;
pub use types::TweetRow;

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn read(&self, locator: &str) -> Result<Vec<u8>, StorageError>;

    async fn write(
        &self,
        locator: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests;
