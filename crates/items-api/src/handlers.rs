//! REST endpoint handlers for the items API.
//!
//! Every handler follows the same shape: load the collection from disk,
//! apply one collection operation, persist if the request mutates, then
//! respond. Requests are not serialized against each other. A `POST` or
//! `PUT` without a `Content-Type` header is treated as an empty object;
//! any other non-JSON body is rejected by the `Json` extractor.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/items` | List all items |
//! | `GET` | `/api/items/:id` | Get one item |
//! | `POST` | `/api/items` | Create an item |
//! | `PUT` | `/api/items/:id` | Shallow-merge fields into an item |
//! | `DELETE` | `/api/items/:id` | Delete an item |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use items_store::{Fields, ItemId, Record};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse the `{id}` path segment.
///
/// Only the leading integer counts (`"1abc"` is item 1). A segment with no
/// leading digits matches no record, so it maps to `None` instead of a 400.
fn parse_id(raw: &str) -> Option<ItemId> {
    ItemId::parse_leading(raw)
}

/// Fields from an optional JSON body. A request with no `Content-Type`
/// header carries an empty object.
fn body_fields(body: Option<Json<Fields>>) -> Fields {
    body.map(|Json(fields)| fields).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// GET /api/items -- list items
// ---------------------------------------------------------------------------

/// Return every item as a JSON array, in insertion order.
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let collection = state.store.load().await?;
    Ok(Json(collection.list().to_vec()))
}

// ---------------------------------------------------------------------------
// GET /api/items/:id -- single item
// ---------------------------------------------------------------------------

/// Return the item with the given identifier, or 404.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    let collection = state.store.load().await?;

    let record = parse_id(&raw_id)
        .and_then(|id| collection.find_by_id(id))
        .ok_or(ApiError::NotFound)?;

    Ok(Json(record.clone()))
}

// ---------------------------------------------------------------------------
// POST /api/items -- create
// ---------------------------------------------------------------------------

/// Create an item from the request body and return it with its new id.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Fields>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut collection = state.store.load().await?;
    let record = collection.insert(body_fields(body))?;
    state.store.persist(&collection).await?;

    info!(id = ?record.id(), "item created");
    Ok((StatusCode::CREATED, Json(record)))
}

// ---------------------------------------------------------------------------
// PUT /api/items/:id -- shallow merge update
// ---------------------------------------------------------------------------

/// Merge the request body into the item and return the result, or 404.
///
/// Nothing is written when the item does not exist.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Option<Json<Fields>>,
) -> Result<Json<Record>, ApiError> {
    let mut collection = state.store.load().await?;

    let record = parse_id(&raw_id)
        .and_then(|id| collection.update(id, body_fields(body)))
        .ok_or(ApiError::NotFound)?;
    state.store.persist(&collection).await?;

    info!(id = %raw_id, "item updated");
    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// DELETE /api/items/:id -- delete
// ---------------------------------------------------------------------------

/// Delete the item and return 204.
///
/// Deleting an absent item is not an error, and the collection is
/// written back either way.
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut collection = state.store.load().await?;

    let removed = parse_id(&raw_id).map_or(0, |id| collection.remove(id));
    state.store.persist(&collection).await?;

    debug!(id = %raw_id, removed, "item delete processed");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_reads_leading_integer() {
        assert_eq!(parse_id("12"), Some(ItemId(12)));
        assert_eq!(parse_id("-3"), Some(ItemId(-3)));
        assert_eq!(parse_id("1abc"), Some(ItemId(1)));
        assert_eq!(parse_id("2.5"), Some(ItemId(2)));
        assert_eq!(parse_id(" 3"), Some(ItemId(3)));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn missing_body_is_empty_object() {
        assert!(body_fields(None).is_empty());
        let mut fields = Fields::new();
        fields.insert(String::from("title"), serde_json::Value::from("A"));
        assert_eq!(body_fields(Some(Json(fields.clone()))), fields);
    }
}
