//! # Pay Resolver Trait
//!
//! Core trait for the LNURL-pay flow: resolve a Lightning Address to its
//! pay endpoint, then fetch an invoice from the endpoint's callback.
//!
//! The HTTP implementation lives in `lnurl-client`; handlers depend only on
//! this trait so they can be exercised against a stub.

use crate::address::LightningAddress;
use crate::amount::Sats;
use crate::error::RelayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A resolved LNURL-pay endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPay {
    /// URL to request invoices from
    pub callback: String,
    /// Embedded PNG icon as a `data:image/png;base64,...` URI, if the
    /// endpoint's metadata carries one
    pub icon_data_uri: Option<String>,
    /// Plain-text description from the endpoint's metadata, if present
    pub description: Option<String>,
    /// Smallest amount the endpoint will invoice
    pub min_sendable: Sats,
    /// Largest amount the endpoint will invoice
    pub max_sendable: Sats,
}

/// An invoice obtained from a pay endpoint's callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceOffer {
    /// The BOLT11 payment request string
    pub invoice: String,
    /// Instant the invoice stops being payable, seconds since the UNIX epoch
    pub expires_at: u64,
}

/// Core trait for LNURL-pay flow implementations.
///
/// One outbound HTTP call per method, no retries, no shared state between
/// calls.
#[async_trait]
pub trait PayResolver: Send + Sync {
    /// Resolve a Lightning Address to its pay endpoint.
    ///
    /// Fetches `https://{domain}/.well-known/lnurlp/{user}` and narrows the
    /// response: a missing `callback` or a `tag` other than `"payRequest"`
    /// is rejected.
    async fn resolve_address(&self, address: &LightningAddress) -> RelayResult<ResolvedPay>;

    /// Request an invoice for `amount` from a previously resolved callback.
    ///
    /// The returned offer always carries the invoice's effective expiration
    /// instant, computed from the decoded BOLT11 payload.
    async fn fetch_invoice(&self, callback: &str, amount: Sats) -> RelayResult<InvoiceOffer>;
}

/// Type alias for a shared resolver (dynamic dispatch)
pub type BoxedPayResolver = Arc<dyn PayResolver>;
