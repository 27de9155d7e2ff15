//! JSON file storage for the item collection.
//!
//! [`JsonFileStore`] reads and writes the whole collection in one go.
//! Nothing is cached between calls: every [`load`](JsonFileStore::load)
//! goes back to disk, and every [`persist`](JsonFileStore::persist)
//! overwrites the document in full. There is no locking, so two callers
//! whose load/persist windows overlap can lose an update.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collection::Collection;
use crate::error::StoreError;

/// Whole-document JSON storage backed by a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the document at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the storage document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from disk.
    ///
    /// A missing file yields an empty collection. Any other failure,
    /// including an empty or malformed document, is an error.
    pub async fn load(&self) -> Result<Collection, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "storage document absent, starting empty");
                return Ok(Collection::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let collection: Collection =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), items = collection.len(), "collection loaded");
        Ok(collection)
    }

    /// Overwrite the storage document with `collection`, pretty-printed.
    pub async fn persist(&self, collection: &Collection) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(collection).map_err(StoreError::Encode)?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), items = collection.len(), "collection persisted");
        Ok(())
    }
}
