//! # lnurl-bolt11
//!
//! BOLT11 invoice section decoder for the lnurl-relay.
//!
//! This crate provides:
//! - `decode` to parse an invoice string into a `Bolt11Invoice`
//! - `Section` for the named invoice sections (timestamp, expiry, amount,
//!   payment hash, description, payee, signature, ...)
//! - `DecodeError` for typed decode failures
//!
//! The decoder validates the bech32 checksum and the field layout; it does
//! not verify the embedded signature or implement the rest of the BOLT11
//! specification. Unrecognized tagged fields survive the decode as opaque
//! `Section::Unknown` entries.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lnurl_bolt11::decode;
//!
//! let invoice = decode("lnbc2500u1...")?;
//! println!(
//!     "created {} expires {:?} for {:?} msat",
//!     invoice.timestamp(),
//!     invoice.expiry_secs(),
//!     invoice.amount_msat(),
//! );
//! ```

pub mod decode;
pub mod error;
pub mod hrp;
pub mod sections;

// Re-exports for convenience
pub use decode::decode;
pub use error::DecodeError;
pub use hrp::Currency;
pub use sections::{Bolt11Invoice, RouteHop, Section};
