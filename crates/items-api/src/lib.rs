//! REST API server for the items collection.
//!
//! This crate provides an Axum HTTP server exposing create, read, update,
//! and delete over a single collection of free-form JSON records:
//!
//! - `GET /api/items` and `GET /api/items/{id}` read
//! - `POST /api/items` creates with a generated integer id
//! - `PUT /api/items/{id}` shallow-merges fields
//! - `DELETE /api/items/{id}` removes
//!
//! # Architecture
//!
//! The server holds no collection in memory. Each request loads the
//! JSON document through [`items_store::JsonFileStore`], applies one
//! operation, and writes the document back if it changed anything. There
//! is no locking between requests, so concurrent writers can clobber each
//! other (last write wins).

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
