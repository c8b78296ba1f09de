//! Ingestion Data Types
//!
//! The JSON document carried by each streamed record.

use crate::analytics::tokenizer::{extract_tags, normalize_tag};
use crate::analytics::types::TagList;
use crate::storage::types::TweetRow;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `hashtags` field as producers send it: either the list-literal string copied
/// from the dataset, or an already-split JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashtagField {
    Encoded(String),
    List(Vec<String>),
}

/// One tweet as published to the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetPayload {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub hashtags: Option<HashtagField>,
    #[serde(default)]
    pub device: Option<String>,
}

impl TweetPayload {
    pub fn from_row(row: &TweetRow) -> Self {
        Self {
            user_name: row.user_name.clone(),
            location: row.user_location.clone(),
            content: row.user_description.clone(),
            hashtags: row.hashtags.clone().map(HashtagField::Encoded),
            device: row.source.clone(),
        }
    }

    /// Decodes a raw feed record.
    ///
    /// The record must be a JSON object. Only `hashtags` is type-checked; the
    /// other fields are kept when they are strings and dropped otherwise.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let Value::Object(mut fields) = serde_json::from_slice::<Value>(bytes)? else {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "tweet record is not a JSON object",
            ));
        };

        let hashtags = match fields.remove("hashtags") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(serde_json::from_value(raw)?),
        };

        Ok(Self {
            user_name: text_field(&fields, "user_name"),
            location: text_field(&fields, "location"),
            content: text_field(&fields, "content"),
            hashtags,
            device: text_field(&fields, "device"),
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Normalized tags carried by this tweet; empty when the field is absent or malformed.
    pub fn tags(&self) -> TagList {
        match &self.hashtags {
            Some(HashtagField::Encoded(raw)) => extract_tags(raw),
            Some(HashtagField::List(items)) => {
                items.iter().filter_map(|item| normalize_tag(item)).collect()
            }
            None => Vec::new(),
        }
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}
