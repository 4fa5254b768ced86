//! # Request Handlers
//!
//! Axum request handlers for the LNURL-pay relay.
//! Each handler is a stateless, single-shot transformation of one inbound
//! request into one upstream call and one reshaped JSON response.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lnurl_core::{LightningAddress, RelayError, Sats};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Resolve request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    /// Lightning Address to resolve, `user@domain`
    pub ln_address: String,
}

/// Resolve response; amounts are in satoshi
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    /// URL to request an invoice from
    pub callback: String,
    /// PNG icon as a data URI, or null when the endpoint carries none
    pub base64_image: Option<String>,
    pub max_sendable: Sats,
    pub min_sendable: Sats,
}

/// Invoice request; amount is in satoshi
#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    /// Callback URL from a previous resolution
    pub callback: String,
    pub amount: u64,
}

/// Invoice response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    /// The BOLT11 payment request string
    pub invoice: String,
    /// Instant the invoice stops being payable, seconds since the UNIX epoch
    pub expires_at: u64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn relay_error_to_response(err: RelayError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lnurl-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Resolve a Lightning Address to its pay callback, limits, and icon
#[instrument(skip(state, request), fields(ln_address = %request.ln_address))]
pub async fn resolve_lnurlp(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let address: LightningAddress = request
        .ln_address
        .parse()
        .map_err(relay_error_to_response)?;

    let resolved = state
        .resolver
        .resolve_address(&address)
        .await
        .map_err(|e| {
            error!("Failed to resolve {}: {}", address, e);
            relay_error_to_response(e)
        })?;

    info!(
        "Resolved {}: callback={}, icon={}",
        address,
        resolved.callback,
        resolved.icon_data_uri.is_some()
    );

    Ok(Json(ResolveResponse {
        callback: resolved.callback,
        base64_image: resolved.icon_data_uri,
        max_sendable: resolved.max_sendable,
        min_sendable: resolved.min_sendable,
    }))
}

/// Request an invoice from a resolved callback for an amount in satoshi
#[instrument(skip(state, request), fields(amount = request.amount))]
pub async fn request_invoice(
    State(state): State<AppState>,
    Json(request): Json<InvoiceRequest>,
) -> Result<Json<InvoiceResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.amount == 0 {
        return Err(relay_error_to_response(RelayError::InvalidRequest(
            "amount must be positive".to_string(),
        )));
    }

    let offer = state
        .resolver
        .fetch_invoice(&request.callback, Sats(request.amount))
        .await
        .map_err(|e| {
            error!("Failed to fetch invoice from {}: {}", request.callback, e);
            relay_error_to_response(e)
        })?;

    info!("Invoice issued, expires at {}", offer.expires_at);

    Ok(Json(InvoiceResponse {
        invoice: offer.invoice,
        expires_at: offer.expires_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_test_router;
    use crate::state::{AppConfig, AppState};
    use async_trait::async_trait;
    use axum_test::TestServer;
    use lnurl_core::{InvoiceOffer, PayResolver, RelayResult, ResolvedPay};
    use serde_json::json;
    use std::sync::Arc;

    /// Canned resolver; error paths keyed off the input
    struct StubResolver;

    #[async_trait]
    impl PayResolver for StubResolver {
        async fn resolve_address(&self, address: &LightningAddress) -> RelayResult<ResolvedPay> {
            if address.domain() == "down.example" {
                return Err(RelayError::UpstreamStatus {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            if address.domain() == "broken.example" {
                return Err(RelayError::BadUpstreamResponse(
                    "endpoint did not provide a callback".to_string(),
                ));
            }
            Ok(ResolvedPay {
                callback: "https://wallet.example/cb".to_string(),
                icon_data_uri: Some("data:image/png;base64,iVBOR...".to_string()),
                description: Some("pay alice".to_string()),
                min_sendable: Sats(1),
                max_sendable: Sats(1_000_000),
            })
        }

        async fn fetch_invoice(&self, callback: &str, _amount: Sats) -> RelayResult<InvoiceOffer> {
            if callback.contains("bad-invoice") {
                return Err(RelayError::MalformedInvoice(
                    "invoice is not valid bech32".to_string(),
                ));
            }
            Ok(InvoiceOffer {
                invoice: "lnbc500u1stubinvoice".to_string(),
                expires_at: 1_700_003_600,
            })
        }
    }

    fn test_server() -> TestServer {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        };
        let state = AppState::with_resolver(Arc::new(StubResolver), config);
        TestServer::new(create_test_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "lnurl-relay");
    }

    #[tokio::test]
    async fn test_resolve() {
        let server = test_server();
        let response = server
            .post("/api/v1/lnurlp")
            .json(&json!({ "lnAddress": "alice@wallet.example" }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            json!({
                "callback": "https://wallet.example/cb",
                "base64Image": "data:image/png;base64,iVBOR...",
                "maxSendable": 1_000_000,
                "minSendable": 1
            })
        );
    }

    #[tokio::test]
    async fn test_resolve_invalid_address() {
        let server = test_server();
        let response = server
            .post("/api/v1/lnurlp")
            .json(&json!({ "lnAddress": "not-an-address" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_resolve_upstream_failure() {
        let server = test_server();
        let response = server
            .post("/api/v1/lnurlp")
            .json(&json!({ "lnAddress": "bob@down.example" }))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_resolve_bad_upstream_response() {
        let server = test_server();
        let response = server
            .post("/api/v1/lnurlp")
            .json(&json!({ "lnAddress": "bob@broken.example" }))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], 502);
    }

    #[tokio::test]
    async fn test_request_invoice() {
        let server = test_server();
        let response = server
            .post("/api/v1/callback")
            .json(&json!({ "callback": "https://wallet.example/cb", "amount": 500 }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            json!({
                "invoice": "lnbc500u1stubinvoice",
                "expiresAt": 1_700_003_600
            })
        );
    }

    #[tokio::test]
    async fn test_request_invoice_zero_amount() {
        let server = test_server();
        let response = server
            .post("/api/v1/callback")
            .json(&json!({ "callback": "https://wallet.example/cb", "amount": 0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_invoice_malformed_upstream_invoice() {
        let server = test_server();
        let response = server
            .post("/api/v1/callback")
            .json(&json!({ "callback": "https://wallet.example/bad-invoice", "amount": 5 }))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(err.details.is_none());

        let err = err.with_details("more context");
        assert_eq!(err.details.as_deref(), Some("more context"));
    }

    #[test]
    fn test_relay_error_conversion() {
        let err = RelayError::InvalidRequest("bad data".to_string());
        let (status, _json) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let err = RelayError::Network("refused".to_string());
        let (status, _json) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
