//! Route table.

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{not_found_handler, query_all_handler, write_handler};
use super::types::AppState;

/// Build the router with both record endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/write", any(write_handler))
        .route("/query/all", any(query_all_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
