//! Axum router construction for the items API.
//!
//! Assembles the five item routes into a single [`Router`] with request
//! tracing and CORS for browser clients on other origins.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the items server.
///
/// The router includes:
/// - `GET /api/items` -- list items
/// - `POST /api/items` -- create an item
/// - `GET /api/items/:id` -- single item
/// - `PUT /api/items/:id` -- merge fields into an item
/// - `DELETE /api/items/:id` -- delete an item
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/api/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
