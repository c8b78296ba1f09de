use super::BlobStore;
use crate::error::StorageError;

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Blob store rooted at a local directory. Locators are relative paths below it.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a locator to a path, refusing anything that escapes the root.
    fn resolve(&self, locator: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(locator);
        let escapes = relative.components().any(|component| {
            !matches!(component, Component::Normal(_) | Component::CurDir)
        });

        if locator.is_empty() || escapes {
            return Err(StorageError::InvalidLocator(locator.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    async fn read(&self, locator: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(locator)?;
        tokio::fs::read(&path).await.map_err(|source| StorageError::Io {
            locator: locator.to_string(),
            source,
        })
    }

    async fn write(
        &self,
        locator: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.resolve(locator)?;
        let io_err = |source| StorageError::Io {
            locator: locator.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let len = bytes.len();
        tokio::fs::write(&path, bytes).await.map_err(io_err)?;

        tracing::info!(
            "Uploaded {} bytes to {} ({})",
            len,
            path.display(),
            content_type
        );
        Ok(())
    }
}
