//! # lnurl-api
//!
//! HTTP API layer for the lnurl-relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for Lightning Address resolution and invoice requests
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/lnurlp` | Resolve a Lightning Address |
//! | POST | `/api/v1/callback` | Request an invoice |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
