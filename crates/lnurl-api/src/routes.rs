//! # Routes
//!
//! Axum router configuration for the LNURL-pay relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /api/v1/lnurlp - Resolve a Lightning Address
/// - POST /api/v1/callback - Request an invoice from a callback
pub fn create_router(state: AppState) -> Router {
    // The relay is meant to sit behind wallet front-ends on other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/lnurlp", post(handlers::resolve_lnurlp))
        .route("/callback", post(handlers::request_invoice));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Create a minimal router for testing
#[cfg(test)]
pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/lnurlp", post(handlers::resolve_lnurlp))
        .route("/api/v1/callback", post(handlers::request_invoice))
        .with_state(state)
}
