//! In-Process Stream Service
//!
//! A sharded, append-only record log per stream, held in memory. It serves both
//! sides of the feed contract: producers `put` records, consumers open a cursor
//! on a shard and `poll` forward from it.
//!
//! Cursors encode `stream:shard:offset`. Callers must treat them as opaque.

use super::types::{Cursor, PolledRecords, PutAck, ShardId, StartPosition};
use super::{PullFeed, PushFeed};
use crate::error::FeedError;

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct MemoryFeed {
    /// Stream name -> number of shards.
    streams: DashMap<String, u32>,
    /// (stream, shard index) -> records in arrival order.
    shards: DashMap<(String, u32), Vec<Vec<u8>>>,
    /// Shard count given to streams created on first put.
    shard_count: u32,
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self::with_shard_count(1)
    }

    pub fn with_shard_count(shard_count: u32) -> Self {
        Self {
            streams: DashMap::new(),
            shards: DashMap::new(),
            shard_count: shard_count.max(1),
        }
    }

    /// Creates `stream` if it does not exist yet. Idempotent.
    pub fn create_stream(&self, stream: &str) {
        self.streams
            .entry(stream.to_string())
            .or_insert(self.shard_count);
    }

    /// Picks the shard for `partition_key`; same key, same shard.
    pub fn shard_for_key(partition_key: &str, shard_count: u32) -> u32 {
        let mut hasher = DefaultHasher::new();
        partition_key.hash(&mut hasher);
        (hasher.finish() % shard_count as u64) as u32
    }

    /// Total records held by `stream` across its shards.
    pub fn record_count(&self, stream: &str) -> usize {
        self.shards
            .iter()
            .filter(|entry| entry.key().0 == stream)
            .map(|entry| entry.value().len())
            .sum()
    }

    fn shard_count_of(&self, stream: &str) -> Result<u32, FeedError> {
        self.streams
            .get(stream)
            .map(|count| *count)
            .ok_or_else(|| FeedError::StreamNotFound(stream.to_string()))
    }

    fn shard_len(&self, stream: &str, shard: u32) -> usize {
        self.shards
            .get(&(stream.to_string(), shard))
            .map(|records| records.len())
            .unwrap_or(0)
    }

    fn encode_cursor(stream: &str, shard: u32, offset: usize) -> Cursor {
        Cursor(format!("{}:{}:{}", stream, shard, offset))
    }

    fn decode_cursor(cursor: &Cursor) -> Result<(String, u32, usize), FeedError> {
        let invalid = || FeedError::InvalidCursor(cursor.0.clone());
        let mut parts = cursor.0.rsplitn(3, ':');

        let offset = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let shard = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let stream = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

        Ok((stream.to_string(), shard, offset))
    }
}

impl Default for MemoryFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PullFeed for MemoryFeed {
    async fn describe(&self, stream: &str) -> Result<Vec<ShardId>, FeedError> {
        let count = self.shard_count_of(stream)?;
        Ok((0..count).map(ShardId::from_index).collect())
    }

    async fn open_cursor(
        &self,
        stream: &str,
        shard: &ShardId,
        position: StartPosition,
    ) -> Result<Cursor, FeedError> {
        let count = self.shard_count_of(stream)?;
        let index = shard
            .index()
            .filter(|idx| *idx < count)
            .ok_or_else(|| FeedError::InvalidCursor(format!("unknown shard {}", shard.0)))?;

        let offset = match position {
            StartPosition::Latest => self.shard_len(stream, index),
            StartPosition::TrimHorizon => 0,
        };

        tracing::debug!(
            "Opened cursor on {}/{} at offset {} ({:?})",
            stream,
            shard.0,
            offset,
            position
        );
        Ok(Self::encode_cursor(stream, index, offset))
    }

    async fn poll(&self, cursor: &Cursor, max_records: usize) -> Result<PolledRecords, FeedError> {
        let (stream, shard, offset) = Self::decode_cursor(cursor)?;
        self.shard_count_of(&stream)?;

        let records: Vec<Vec<u8>> = match self.shards.get(&(stream.clone(), shard)) {
            Some(log) => {
                if offset > log.len() {
                    return Err(FeedError::InvalidCursor(cursor.0.clone()));
                }
                let end = offset.saturating_add(max_records).min(log.len());
                log[offset..end].to_vec()
            }
            None if offset == 0 => Vec::new(),
            None => return Err(FeedError::InvalidCursor(cursor.0.clone())),
        };

        let next_cursor = Self::encode_cursor(&stream, shard, offset + records.len());
        Ok(PolledRecords {
            records,
            next_cursor,
        })
    }
}

#[async_trait]
impl PushFeed for MemoryFeed {
    async fn put(
        &self,
        stream: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<PutAck, FeedError> {
        self.create_stream(stream);
        let count = self.shard_count_of(stream)?;
        let shard = Self::shard_for_key(partition_key, count);

        let mut log = self.shards.entry((stream.to_string(), shard)).or_default();
        log.push(payload);
        let sequence_number = (log.len() - 1) as u64;

        Ok(PutAck {
            shard_id: ShardId::from_index(shard),
            sequence_number,
        })
    }
}
