//! # Decode Error Types
//!
//! Typed errors for BOLT11 decoding. Every variant means the invoice string
//! is unusable; unrecognized tagged fields are *not* errors and are
//! preserved as opaque sections instead (see `Section::Unknown`).

use thiserror::Error;

/// Error type for BOLT11 decoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The string is not valid bech32 (bad charset, mixed case, checksum)
    #[error("invoice is not valid bech32: {0}")]
    Bech32(#[from] bech32::Error),

    /// The checksum validates under bech32m, which invoices never use
    #[error("invoice checksum uses the wrong bech32 variant")]
    WrongVariant,

    /// The human-readable part does not start with `ln`
    #[error("human-readable part {0:?} does not start with \"ln\"")]
    MissingLnPrefix(String),

    /// The currency identifier after `ln` is not recognized
    #[error("unrecognized currency identifier {0:?}")]
    UnknownCurrency(String),

    /// The amount in the human-readable part is not parsable
    #[error("invalid amount in human-readable part: {0}")]
    InvalidAmount(String),

    /// The data part is too short to hold timestamp and signature
    #[error("invoice data is truncated")]
    Truncated,

    /// A tagged field declares more data than the invoice carries
    #[error("tagged field {tag} is truncated")]
    TruncatedField { tag: u8 },

    /// The description field is not valid UTF-8
    #[error("description is not valid UTF-8")]
    DescriptionNotUtf8,
}
