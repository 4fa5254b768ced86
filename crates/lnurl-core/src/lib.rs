//! # lnurl-core
//!
//! Core types and traits for the lnurl-relay LNURL-pay relay.
//!
//! This crate provides:
//! - `LightningAddress` parsing and well-known URL derivation
//! - `Msats`/`Sats` amount units and their conversions
//! - `PayMetadata` for the LNURL-pay metadata array
//! - `PayResolver` trait for implementing the pay flow
//! - `RelayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use lnurl_core::{LightningAddress, PayResolver, Sats};
//!
//! let address: LightningAddress = "alice@wallet.example".parse()?;
//!
//! // Resolve the address to its pay endpoint
//! let resolved = resolver.resolve_address(&address).await?;
//! println!("send between {} and {}", resolved.min_sendable, resolved.max_sendable);
//!
//! // Fetch an invoice for 500 sat
//! let offer = resolver.fetch_invoice(&resolved.callback, Sats(500)).await?;
//! println!("{} expires at {}", offer.invoice, offer.expires_at);
//! ```

pub mod address;
pub mod amount;
pub mod error;
pub mod metadata;
pub mod resolver;

// Re-exports for convenience
pub use address::LightningAddress;
pub use amount::{Msats, Sats, MSAT_PER_SAT};
pub use error::{RelayError, RelayResult};
pub use metadata::{PayMetadata, ICON_MIME, TEXT_MIME};
pub use resolver::{BoxedPayResolver, InvoiceOffer, PayResolver, ResolvedPay};
