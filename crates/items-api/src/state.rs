//! Shared application state for the items API server.
//!
//! The state only carries the storage handle. No collection is held in
//! memory between requests; every handler loads it fresh.

use std::path::PathBuf;

use items_store::JsonFileStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The storage document backing the collection.
    pub store: JsonFileStore,
}

impl AppState {
    /// Create application state storing items in the document at `db_path`.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(db_path),
        }
    }
}
