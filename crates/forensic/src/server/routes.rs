//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers;
use super::AppState;

/// Uploaded images are never read, but the whole multipart body still arrives.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Form UI
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate_form))
        .route("/export", post(handlers::export_form))
        // JSON API
        .route("/api/report", post(handlers::api_report))
        .route("/api/export", post(handlers::api_export))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
