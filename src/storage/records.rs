use super::types::TweetRow;
use crate::error::StorageError;

/// Decodes a headered tweet CSV. Unknown columns are ignored and short rows are
/// tolerated; a structurally broken file is an error.
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<TweetRow>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.deserialize::<TweetRow>() {
        rows.push(record?);
    }

    tracing::debug!("Decoded {} tweet rows", rows.len());
    Ok(rows)
}

/// Tag blobs of `rows`, skipping rows without one.
pub fn tag_blobs(rows: &[TweetRow]) -> Vec<String> {
    rows.iter().filter_map(|row| row.hashtags.clone()).collect()
}
