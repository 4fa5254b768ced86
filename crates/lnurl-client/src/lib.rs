//! # lnurl-client
//!
//! LNURL-pay HTTP flow for the lnurl-relay.
//!
//! This crate provides the reqwest-backed `PayResolver` implementation:
//!
//! 1. **Resolve** - `user@domain` to the well-known LNURL-pay endpoint,
//!    narrowed into callback, limits, and optional icon.
//! 2. **Fetch invoice** - callback plus amount to a BOLT11 invoice with
//!    its effective expiration instant.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lnurl_client::LnurlPayClient;
//! use lnurl_core::{PayResolver, Sats};
//!
//! let client = LnurlPayClient::from_env();
//!
//! let address = "alice@wallet.example".parse()?;
//! let resolved = client.resolve_address(&address).await?;
//!
//! let offer = client.fetch_invoice(&resolved.callback, Sats(500)).await?;
//! println!("{} expires at {}", offer.invoice, offer.expires_at);
//! ```

pub mod client;
pub mod config;
pub mod expiry;

// Re-exports
pub use client::LnurlPayClient;
pub use config::ClientConfig;
pub use expiry::{expires_at, DEFAULT_EXPIRY_SECS};
