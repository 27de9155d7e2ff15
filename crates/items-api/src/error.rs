//! Error types for the items API layer.
//!
//! [`ApiError`] is what handlers return; its
//! [`IntoResponse`](axum::response::IntoResponse) implementation turns it
//! into a JSON error body. Storage failures are logged and reported as a
//! generic 500 without leaking paths or I/O details to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use items_store::StoreError;

/// Message body returned when an identifier matches no record.
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Message body returned when the storage layer fails.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors that can occur while handling an items request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested item does not exist.
    #[error("item not found")]
    NotFound,

    /// Loading, mutating, or persisting the collection failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::Store(e) => {
                tracing::error!(error = %e, "request failed in storage layer");
                INTERNAL_MESSAGE
            }
        };

        let body = serde_json::json!({ "message": message });

        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use items_store::ItemId;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_map_to_500() {
        let err = ApiError::from(StoreError::IdOverflow(ItemId(i64::MAX)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
