use serde::{Deserialize, Serialize};

/// One row of the tweet dataset. Only the columns the system reads are kept;
/// empty cells and absent columns are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetRow {
    pub user_name: Option<String>,
    pub user_location: Option<String>,
    /// Free text fed to the sentiment classifier.
    pub user_description: Option<String>,
    /// Serialized tag list, e.g. `['covid19', 'lockdown']`.
    pub hashtags: Option<String>,
    pub source: Option<String>,
}

/// Content type used when publishing CSV tables.
pub const CONTENT_TYPE_CSV: &str = "text/csv";
