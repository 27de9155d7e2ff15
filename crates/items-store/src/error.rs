//! Error types for the storage layer.
//!
//! All failures are surfaced through [`StoreError`], carrying the document
//! path where a file operation was involved.

use std::path::PathBuf;

use crate::record::ItemId;

/// Errors that can occur while loading, mutating, or persisting items.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage document exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the storage document.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The storage document is not a valid items document.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// Path of the storage document.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to encode items: {0}")]
    Encode(#[source] serde_json::Error),

    /// The storage document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the storage document.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// No identifier follows the last record's identifier.
    #[error("identifier overflow after {0}")]
    IdOverflow(ItemId),
}
