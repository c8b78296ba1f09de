//! Record Feed Module
//!
//! The live, time-ordered record source consumed by the sliding-window session,
//! and the push side used by the producer simulator.
//!
//! ## Contracts
//! - **`PullFeed`**: `describe` a stream's shards, `open_cursor` on one shard, then
//!   `poll` forward. Cursors are opaque and only ever forwarded.
//! - **`PushFeed`**: `put` one payload routed by a partition key.
//!
//! ## Submodules
//! - **`memory`**: In-process stream service implementing both contracts.
//! - **`handlers`**: Axum routes exposing a `MemoryFeed` over HTTP.
//! - **`client`**: `HttpFeed`, the reqwest-based client for those routes.
//! - **`protocol`**: Endpoint paths and request/response DTOs.
//! - **`types`**: Shard ids, cursors, start positions and poll results.

pub mod client;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod types;

use crate::error::FeedError;
use async_trait::async_trait;
use types::{Cursor, PolledRecords, PutAck, ShardId, StartPosition};

pub use client::HttpFeed;
pub use memory::MemoryFeed;

#[async_trait]
pub trait PullFeed: Send + Sync {
    async fn describe(&self, stream: &str) -> Result<Vec<ShardId>, FeedError>;

    async fn open_cursor(
        &self,
        stream: &str,
        shard: &ShardId,
        position: StartPosition,
    ) -> Result<Cursor, FeedError>;

    /// Returns at most `max_records` records after `cursor` and the cursor to continue from.
    async fn poll(&self, cursor: &Cursor, max_records: usize) -> Result<PolledRecords, FeedError>;
}

#[async_trait]
pub trait PushFeed: Send + Sync {
    async fn put(
        &self,
        stream: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<PutAck, FeedError>;
}
