use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router. Callers add CORS and metrics layers.
pub fn build_router(state: AppState) -> Router {
    let limit = state.max_document_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/extract", post(handlers::extract::extract_metadata))
        .route("/extract/preview", post(handlers::extract::extract_preview))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
