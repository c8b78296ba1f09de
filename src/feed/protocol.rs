//! Feed Network Protocol
//!
//! HTTP endpoints and DTOs for talking to a feed service. All bodies are JSON.

use super::types::{Cursor, ShardId, StartPosition};
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Prefix of per-stream routes: `GET /streams/:name`, `POST /streams/:name/cursor`,
/// `POST /streams/:name/records`.
pub const ENDPOINT_STREAMS: &str = "/streams";
/// Cursor-addressed read; the stream is implied by the cursor.
pub const ENDPOINT_POLL: &str = "/records/poll";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeStreamResponse {
    pub stream: String,
    pub shards: Vec<ShardId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenCursorRequest {
    pub shard: ShardId,
    pub position: StartPosition,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenCursorResponse {
    pub cursor: Cursor,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollRequest {
    pub cursor: Cursor,
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollResponse {
    /// Raw record payloads, oldest first.
    pub records: Vec<Vec<u8>>,
    pub next_cursor: Cursor,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PutRecordRequest {
    pub data: Vec<u8>,
    pub partition_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PutRecordResponse {
    pub shard_id: ShardId,
    pub sequence_number: u64,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
