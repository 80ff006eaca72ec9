//! Router construction.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{file, health};
use super::middleware::log_request;

/// Build the complete router with all REST routes.
pub fn build_router() -> Router {
    Router::new()
        // --- System ---
        .route("/health", get(health::health))
        .route("/info", get(health::info))
        // --- Classification ---
        .route("/file", post(file::detect_type))
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}
