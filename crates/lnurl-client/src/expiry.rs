//! # Invoice Expiry Policy
//!
//! BOLT11 leaves the invoice lifetime implicit when the `x` field is
//! absent. The decoder reports absence as-is; the one-hour fallback is
//! applied here, and its value must stay stable for clients that rely
//! on it.

use lnurl_bolt11::Bolt11Invoice;

/// Lifetime assumed for invoices that carry no explicit expiry field
pub const DEFAULT_EXPIRY_SECS: u64 = 3600;

/// Instant an invoice stops being payable, seconds since the UNIX epoch
pub fn expires_at(invoice: &Bolt11Invoice) -> u64 {
    invoice
        .timestamp()
        .saturating_add(invoice.expiry_secs().unwrap_or(DEFAULT_EXPIRY_SECS))
}
