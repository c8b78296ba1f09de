//! Storage Module Tests
//!
//! ## Test Scopes
//! - **Rows**: CSV decoding keeps the used columns and maps empty cells to `None`.
//! - **LocalStore**: Round-trips blobs under a temporary root and rejects escaping locators.

#[cfg(test)]
mod tests {
    use crate::error::StorageError;
    use crate::storage::records::{decode_rows, tag_blobs};
    use crate::storage::{BlobStore, LocalStore};

    const SAMPLE_CSV: &str = "\
user_name,user_location,user_description,user_created,hashtags,source,is_retweet
alice,Madrid,Great doctor,2020-01-01,\"['Covid19', 'Masks']\",Twitter for iPhone,False
bob,,,2019-05-05,,Twitter Web App,False
carol,Lima,Worst year ever,2018-03-03,\"['covid19']\",Twitter for Android,False
";

    // ============================================================
    // CSV ROW TESTS
    // ============================================================

    #[test]
    fn test_decode_rows_reads_used_columns() {
        let rows = decode_rows(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].user_name.as_deref(), Some("alice"));
        assert_eq!(rows[0].hashtags.as_deref(), Some("['Covid19', 'Masks']"));
        assert_eq!(rows[0].user_description.as_deref(), Some("Great doctor"));
        assert_eq!(rows[2].source.as_deref(), Some("Twitter for Android"));
    }

    #[test]
    fn test_decode_rows_empty_cells_are_missing() {
        let rows = decode_rows(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(rows[1].user_location, None);
        assert_eq!(rows[1].user_description, None);
        assert_eq!(rows[1].hashtags, None);
    }

    #[test]
    fn test_tag_blobs_skips_missing() {
        let rows = decode_rows(SAMPLE_CSV.as_bytes()).unwrap();
        let blobs = tag_blobs(&rows);

        assert_eq!(blobs, vec!["['Covid19', 'Masks']", "['covid19']"]);
    }

    // ============================================================
    // LOCAL STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_local_store_round_trip_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store
            .write("benchmarks/results.csv", b"a,b\n1,2\n".to_vec(), "text/csv")
            .await
            .unwrap();

        let bytes = store.read("benchmarks/results.csv").await.unwrap();
        assert_eq!(bytes, b"a,b\n1,2\n");
        assert!(dir.path().join("benchmarks").is_dir());
    }

    #[tokio::test]
    async fn test_local_store_missing_blob_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let result = store.read("nope.csv").await;
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[tokio::test]
    async fn test_local_store_rejects_escaping_locators() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        for locator in ["../secret", "/etc/passwd", "a/../../b", ""] {
            let result = store.read(locator).await;
            assert!(
                matches!(result, Err(StorageError::InvalidLocator(_))),
                "{} should be rejected",
                locator
            );
        }
    }
}
