//! HTTP Feed Client
//!
//! Speaks the feed protocol against a remote feed service. Every transport failure
//! becomes `FeedError::Connection`; non-2xx answers become `FeedError::Api`. No
//! retries are attempted here: a failing feed ends the streaming session.

use super::protocol::*;
use super::types::{Cursor, PolledRecords, PutAck, ShardId, StartPosition};
use super::{PullFeed, PushFeed};
use crate::error::FeedError;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpFeed {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpFeed {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:4566`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/streams/{stream}[/{action}]`, with the stream name percent-encoded
    /// as a single path segment.
    fn stream_url(&self, stream: &str, action: Option<&str>) -> Result<Url, FeedError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FeedError::Connection(format!("invalid feed url {}: {}", self.base_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FeedError::Connection(format!("feed url {} cannot take a path", self.base_url)))?;
            segments
                .pop_if_empty()
                .push(ENDPOINT_STREAMS.trim_start_matches('/'))
                .push(stream);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    fn poll_url(&self) -> Result<Url, FeedError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_POLL);
        Url::parse(&url).map_err(|e| FeedError::Connection(format!("invalid feed url {}: {}", url, e)))
    }

    async fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R, FeedError> {
        let response = self
            .http_client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<T: Serialize + Sync, R: DeserializeOwned>(
        &self,
        url: Url,
        payload: &T,
    ) -> Result<R, FeedError> {
        let response = self
            .http_client
            .post(url)
            .json(payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, FeedError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl PullFeed for HttpFeed {
    async fn describe(&self, stream: &str) -> Result<Vec<ShardId>, FeedError> {
        let body: DescribeStreamResponse = self.get_json(self.stream_url(stream, None)?).await?;
        Ok(body.shards)
    }

    async fn open_cursor(
        &self,
        stream: &str,
        shard: &ShardId,
        position: StartPosition,
    ) -> Result<Cursor, FeedError> {
        let request = OpenCursorRequest {
            shard: shard.clone(),
            position,
        };
        let body: OpenCursorResponse = self
            .post_json(self.stream_url(stream, Some("cursor"))?, &request)
            .await?;
        Ok(body.cursor)
    }

    async fn poll(&self, cursor: &Cursor, max_records: usize) -> Result<PolledRecords, FeedError> {
        let request = PollRequest {
            cursor: cursor.clone(),
            limit: max_records,
        };
        let body: PollResponse = self
            .post_json(self.poll_url()?, &request)
            .await?;
        Ok(PolledRecords {
            records: body.records,
            next_cursor: body.next_cursor,
        })
    }
}

#[async_trait]
impl PushFeed for HttpFeed {
    async fn put(
        &self,
        stream: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<PutAck, FeedError> {
        let request = PutRecordRequest {
            data: payload,
            partition_key: partition_key.to_string(),
        };
        let body: PutRecordResponse = self
            .post_json(self.stream_url(stream, Some("records"))?, &request)
            .await?;
        Ok(PutAck {
            shard_id: body.shard_id,
            sequence_number: body.sequence_number,
        })
    }
}
