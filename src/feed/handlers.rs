use super::memory::MemoryFeed;
use super::protocol::*;
use super::{PullFeed, PushFeed};
use crate::error::FeedError;

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Routes serving `feed` over HTTP.
pub fn router(feed: Arc<MemoryFeed>) -> Router {
    Router::new()
        .route("/streams/:name", get(handle_describe_stream))
        .route("/streams/:name/cursor", post(handle_open_cursor))
        .route("/streams/:name/records", post(handle_put_record))
        .route(ENDPOINT_POLL, post(handle_poll))
        .layer(Extension(feed))
}

fn api_error(err: FeedError) -> ApiError {
    let status = match &err {
        FeedError::StreamNotFound(_) | FeedError::NoShards(_) => StatusCode::NOT_FOUND,
        FeedError::InvalidCursor(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!("Feed request failed: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn handle_describe_stream(
    Extension(feed): Extension<Arc<MemoryFeed>>,
    Path(name): Path<String>,
) -> Result<Json<DescribeStreamResponse>, ApiError> {
    let shards = feed.describe(&name).await.map_err(api_error)?;
    Ok(Json(DescribeStreamResponse {
        stream: name,
        shards,
    }))
}

pub async fn handle_open_cursor(
    Extension(feed): Extension<Arc<MemoryFeed>>,
    Path(name): Path<String>,
    Json(req): Json<OpenCursorRequest>,
) -> Result<Json<OpenCursorResponse>, ApiError> {
    let cursor = feed
        .open_cursor(&name, &req.shard, req.position)
        .await
        .map_err(api_error)?;
    Ok(Json(OpenCursorResponse { cursor }))
}

pub async fn handle_poll(
    Extension(feed): Extension<Arc<MemoryFeed>>,
    Json(req): Json<PollRequest>,
) -> Result<Json<PollResponse>, ApiError> {
    let polled = feed.poll(&req.cursor, req.limit).await.map_err(api_error)?;

    tracing::trace!("Served {} records", polled.records.len());
    Ok(Json(PollResponse {
        records: polled.records,
        next_cursor: polled.next_cursor,
    }))
}

pub async fn handle_put_record(
    Extension(feed): Extension<Arc<MemoryFeed>>,
    Path(name): Path<String>,
    Json(req): Json<PutRecordRequest>,
) -> Result<(StatusCode, Json<PutRecordResponse>), ApiError> {
    let ack = feed
        .put(&name, req.data, &req.partition_key)
        .await
        .map_err(api_error)?;

    tracing::debug!(
        "Stored record {} in {}/{}",
        ack.sequence_number,
        name,
        ack.shard_id.0
    );
    Ok((
        StatusCode::CREATED,
        Json(PutRecordResponse {
            shard_id: ack.shard_id,
            sequence_number: ack.sequence_number,
        }),
    ))
}
