//! # Invoice Sections
//!
//! A decoded BOLT11 invoice is an ordered sequence of named sections. The
//! decoder recognizes the tagged fields defined by BOLT11 and preserves
//! anything it does not recognize as an opaque `Unknown` section, so the
//! full data part survives a decode.

use crate::hrp::Currency;

/// One hop of a private routing hint (`r` field)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHop {
    /// Node the channel leads out of
    pub src_node_id: [u8; 33],
    pub short_channel_id: u64,
    pub fee_base_msat: u32,
    pub fee_proportional_millionths: u32,
    pub cltv_expiry_delta: u16,
}

/// A single decoded section of a BOLT11 invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Amount from the human-readable part, in millisatoshi
    Amount(u64),
    /// Creation time, seconds since the UNIX epoch (fixed 35-bit field)
    Timestamp(u64),
    /// `p` - 256-bit payment hash
    PaymentHash([u8; 32]),
    /// `s` - 256-bit payment secret
    PaymentSecret([u8; 32]),
    /// `d` - short UTF-8 description of the purpose of payment
    Description(String),
    /// `h` - SHA256 of a longer out-of-band description
    DescriptionHash([u8; 32]),
    /// `n` - payee public key
    Payee([u8; 33]),
    /// `x` - invoice lifetime in seconds after `Timestamp`
    Expiry(u64),
    /// `c` - `min_final_cltv_expiry_delta` for the last hop
    MinFinalCltvExpiry(u64),
    /// `9` - feature bits, raw 5-bit groups as encoded
    Features(Vec<u8>),
    /// `f` - on-chain fallback address (witness version + program)
    Fallback { version: u8, program: Vec<u8> },
    /// `r` - private routing hint, one or more hops
    RouteHint(Vec<RouteHop>),
    /// Trailing 520-bit recoverable signature, kept opaque (65 bytes)
    Signature(Vec<u8>),
    /// Unrecognized tagged field, raw 5-bit groups as encoded
    Unknown { tag: u8, data: Vec<u8> },
}

impl Section {
    /// The section's name, used for lookup on `Bolt11Invoice`
    pub fn name(&self) -> &'static str {
        match self {
            Section::Amount(_) => "amount",
            Section::Timestamp(_) => "timestamp",
            Section::PaymentHash(_) => "payment_hash",
            Section::PaymentSecret(_) => "payment_secret",
            Section::Description(_) => "description",
            Section::DescriptionHash(_) => "description_hash",
            Section::Payee(_) => "payee",
            Section::Expiry(_) => "expiry",
            Section::MinFinalCltvExpiry(_) => "min_final_cltv_expiry",
            Section::Features(_) => "features",
            Section::Fallback { .. } => "fallback",
            Section::RouteHint(_) => "route_hint",
            Section::Signature(_) => "signature",
            Section::Unknown { .. } => "unknown",
        }
    }
}

/// A decoded BOLT11 invoice: the network it is payable on plus its sections
/// in encoding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bolt11Invoice {
    currency: Currency,
    sections: Vec<Section>,
}

impl Bolt11Invoice {
    /// Assemble an invoice from already-decoded sections.
    ///
    /// `decode` is the usual entry point; this exists so callers can build
    /// invoices directly, e.g. in tests.
    pub fn from_sections(currency: Currency, sections: Vec<Section>) -> Self {
        Self { currency, sections }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All sections in encoding order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with the given name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Creation time in seconds since the UNIX epoch.
    ///
    /// The decoder always emits a `Timestamp` section; an invoice built
    /// without one reads as zero.
    pub fn timestamp(&self) -> u64 {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Timestamp(t) => Some(*t),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Invoice lifetime in seconds, when an `x` field is present.
    ///
    /// Absence is reported as `None`; the fallback lifetime is the
    /// caller's policy, not the decoder's.
    pub fn expiry_secs(&self) -> Option<u64> {
        self.sections.iter().find_map(|s| match s {
            Section::Expiry(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Amount in millisatoshi, when the human-readable part carries one
    pub fn amount_msat(&self) -> Option<u64> {
        self.sections.iter().find_map(|s| match s {
            Section::Amount(msat) => Some(*msat),
            _ => None,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            Section::Description(d) => Some(d.as_str()),
            _ => None,
        })
    }

    pub fn payment_hash(&self) -> Option<&[u8; 32]> {
        self.sections.iter().find_map(|s| match s {
            Section::PaymentHash(h) => Some(h),
            _ => None,
        })
    }

    /// Payment hash rendered as lowercase hex, for logs and display
    pub fn payment_hash_hex(&self) -> Option<String> {
        self.payment_hash().map(hex::encode)
    }

    pub fn payee(&self) -> Option<&[u8; 33]> {
        self.sections.iter().find_map(|s| match s {
            Section::Payee(key) => Some(key),
            _ => None,
        })
    }

    pub fn signature(&self) -> Option<&[u8]> {
        self.sections.iter().find_map(|s| match s {
            Section::Signature(sig) => Some(sig.as_slice()),
            _ => None,
        })
    }

    /// Tags of the fields the decoder did not recognize, in encoding order
    pub fn unknown_tags(&self) -> Vec<u8> {
        self.sections
            .iter()
            .filter_map(|s| match s {
                Section::Unknown { tag, .. } => Some(*tag),
                _ => None,
            })
            .collect()
    }
}
