//! # LNURL-pay Client
//!
//! reqwest-backed implementation of the `PayResolver` trait: resolves
//! Lightning Addresses through their well-known endpoint and fetches
//! invoices from pay callbacks.
//!
//! Upstream JSON is modeled as explicit optional-field structs and
//! narrowed at this boundary; missing or mismatched fields become typed
//! errors instead of partial results.

use crate::config::ClientConfig;
use crate::expiry::expires_at;
use async_trait::async_trait;
use lnurl_core::{
    InvoiceOffer, LightningAddress, Msats, PayMetadata, PayResolver, RelayError, RelayResult,
    ResolvedPay, Sats,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

/// The `tag` value an LNURL-pay endpoint must answer with
const PAY_REQUEST_TAG: &str = "payRequest";

/// LNURL-pay client over plain HTTP GETs
///
/// One outbound call per operation, no retries, no shared state beyond
/// the connection pool inside `reqwest::Client`.
pub struct LnurlPayClient {
    config: ClientConfig,
    client: Client,
}

impl LnurlPayClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Well-known URL for an address, honoring the test override
    fn endpoint_url(&self, address: &LightningAddress) -> String {
        match &self.config.endpoint_base {
            Some(base) => format!("{}/.well-known/lnurlp/{}", base, address.user()),
            None => address.well_known_url(),
        }
    }

    /// Issue one GET and hand back the body of a successful response
    async fn get_text(&self, url: &str) -> RelayResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Upstream error: url={}, status={}", url, status);
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl PayResolver for LnurlPayClient {
    #[instrument(skip(self, address), fields(address = %address))]
    async fn resolve_address(&self, address: &LightningAddress) -> RelayResult<ResolvedPay> {
        let url = self.endpoint_url(address);
        debug!("Resolving {} via {}", address, url);

        let body = self.get_text(&url).await?;
        let response: PayEndpointResponse = serde_json::from_str(&body).map_err(|e| {
            RelayError::BadUpstreamResponse(format!("unparsable endpoint response: {e}"))
        })?;

        let resolved = narrow_endpoint(response)?;

        info!(
            "Resolved {}: callback={}, min={}, max={}",
            address, resolved.callback, resolved.min_sendable, resolved.max_sendable
        );

        Ok(resolved)
    }

    #[instrument(skip(self))]
    async fn fetch_invoice(&self, callback: &str, amount: Sats) -> RelayResult<InvoiceOffer> {
        if amount.is_zero() {
            return Err(RelayError::InvalidRequest(
                "amount must be positive".to_string(),
            ));
        }
        if !callback.starts_with("https://") && !callback.starts_with("http://") {
            return Err(RelayError::InvalidRequest(format!(
                "callback is not an http(s) URL: {callback}"
            )));
        }

        let url = callback_url(callback, amount.to_msats());
        debug!("Requesting invoice: {}", url);

        let body = self.get_text(&url).await?;
        let response: CallbackResponse = serde_json::from_str(&body).map_err(|e| {
            RelayError::BadUpstreamResponse(format!("unparsable callback response: {e}"))
        })?;

        let pr = narrow_callback(response)?;

        let invoice = lnurl_bolt11::decode(&pr)
            .map_err(|e| RelayError::MalformedInvoice(e.to_string()))?;
        for tag in invoice.unknown_tags() {
            warn!("Invoice carries unrecognized tagged field {}", tag);
        }

        let expires_at = expires_at(&invoice);

        info!(
            "Fetched {} invoice: payment_hash={}, expires_at={}",
            invoice.currency().as_str(),
            invoice.payment_hash_hex().unwrap_or_default(),
            expires_at
        );

        Ok(InvoiceOffer {
            invoice: pr,
            expires_at,
        })
    }
}

/// Append the millisatoshi amount to a callback URL
fn callback_url(callback: &str, amount: Msats) -> String {
    let separator = if callback.contains('?') { '&' } else { '?' };
    format!("{callback}{separator}amount={}", amount.0)
}

// =============================================================================
// Upstream Response Types
// =============================================================================

/// Raw well-known endpoint response, before narrowing
#[derive(Debug, Default, Deserialize)]
struct PayEndpointResponse {
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    callback: Option<String>,
    #[serde(default, rename = "minSendable")]
    min_sendable: Option<u64>,
    #[serde(default, rename = "maxSendable")]
    max_sendable: Option<u64>,
    /// JSON string encoding the `[[mimeType, content], ...]` array
    #[serde(default)]
    metadata: Option<String>,
}

/// Raw callback response; LUD-06 reports failures as `status`/`reason`
#[derive(Debug, Default, Deserialize)]
struct CallbackResponse {
    #[serde(default)]
    pr: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// Validate an endpoint response and reshape it into a `ResolvedPay`
fn narrow_endpoint(response: PayEndpointResponse) -> RelayResult<ResolvedPay> {
    if response.tag.as_deref() != Some(PAY_REQUEST_TAG) {
        return Err(RelayError::BadUpstreamResponse(format!(
            "endpoint tag is {:?}, expected {PAY_REQUEST_TAG:?}",
            response.tag
        )));
    }

    let callback = response
        .callback
        .filter(|cb| !cb.is_empty())
        .ok_or_else(|| {
            RelayError::BadUpstreamResponse("endpoint did not provide a callback".to_string())
        })?;

    // metadata is advisory: an unparsable blob costs us the icon and
    // description, not the resolution
    let metadata = response.metadata.as_deref().and_then(|raw| {
        PayMetadata::parse(raw)
            .map_err(|e| warn!("Ignoring unparsable endpoint metadata: {}", e))
            .ok()
    });

    Ok(ResolvedPay {
        callback,
        icon_data_uri: metadata.as_ref().and_then(|m| m.icon_data_uri()),
        description: metadata
            .as_ref()
            .and_then(|m| m.text_plain().map(String::from)),
        min_sendable: Msats(response.min_sendable.unwrap_or(0)).to_sats(),
        max_sendable: Msats(response.max_sendable.unwrap_or(0)).to_sats(),
    })
}

/// Validate a callback response and extract the payment request
fn narrow_callback(response: CallbackResponse) -> RelayResult<String> {
    if response.status.as_deref() == Some("ERROR") {
        return Err(RelayError::BadUpstreamResponse(format!(
            "callback reported an error: {}",
            response.reason.as_deref().unwrap_or("no reason given")
        )));
    }

    response
        .pr
        .filter(|pr| !pr.is_empty())
        .ok_or_else(|| {
            RelayError::BadUpstreamResponse("callback did not provide an invoice".to_string())
        })
}
