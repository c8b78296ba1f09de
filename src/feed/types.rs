use serde::{Deserialize, Serialize};

/// Identifier of one shard of a stream, e.g. `shardId-000000000000`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShardId(pub String);

impl ShardId {
    pub fn from_index(index: u32) -> Self {
        Self(format!("shardId-{:012}", index))
    }

    pub fn index(&self) -> Option<u32> {
        self.0.strip_prefix("shardId-")?.parse().ok()
    }
}

/// Opaque, feed-issued position token. Consumers only pass it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor(pub String);

/// Where a freshly opened cursor starts reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartPosition {
    /// Only records put after the cursor was opened.
    Latest,
    /// The oldest record still held by the shard.
    TrimHorizon,
}

/// One poll's worth of raw records plus the cursor to continue from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolledRecords {
    pub records: Vec<Vec<u8>>,
    pub next_cursor: Cursor,
}

/// Acknowledgement of a single put.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PutAck {
    pub shard_id: ShardId,
    pub sequence_number: u64,
}
