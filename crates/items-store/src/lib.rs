//! Storage layer for the items service.
//!
//! The whole item collection lives in one pretty-printed JSON document on
//! local disk. Each request loads it, applies one operation in memory, and
//! (for mutations) writes it back:
//!
//! ```text
//! JsonFileStore::load --> Collection --(list/find/insert/update/remove)
//!                                    |
//!                                    +--> JsonFileStore::persist
//! ```
//!
//! # Modules
//!
//! - [`record`] -- [`Record`] and [`ItemId`]
//! - [`collection`] -- [`Collection`] and its operations
//! - [`store`] -- [`JsonFileStore`], whole-file load and persist
//! - [`error`] -- [`StoreError`]

pub mod collection;
pub mod error;
pub mod record;
pub mod store;

// Re-export primary types for convenience.
pub use collection::Collection;
pub use error::StoreError;
pub use record::{Fields, ItemId, Record, ID_FIELD};
pub use store::JsonFileStore;
