//! # BOLT11 Decoding
//!
//! Converts an opaque BOLT11 invoice string into a `Bolt11Invoice` with its
//! ordered sections. Layout of the data part after bech32 decoding:
//!
//! ```text
//! | timestamp (7 groups) | tagged fields ... | signature (104 groups) |
//! ```
//!
//! Each tagged field is `| tag (1) | data_length (2) | data (data_length) |`
//! in 5-bit groups. The signature is kept opaque; this decoder validates
//! the bech32 checksum, not the cryptography.

use crate::error::DecodeError;
use crate::hrp::{parse_hrp, ParsedHrp};
use crate::sections::{Bolt11Invoice, RouteHop, Section};
use bech32::{u5, Variant};

/// 35-bit creation timestamp: seven 5-bit groups
const TIMESTAMP_GROUPS: usize = 7;
/// 520-bit recoverable signature: 104 5-bit groups
const SIGNATURE_GROUPS: usize = 104;
/// One routing-hint hop: pubkey + scid + fees + cltv delta
const ROUTE_HOP_BYTES: usize = 33 + 8 + 4 + 4 + 2;

// Tag values are the bech32 charset positions of the mnemonic letters
const TAG_PAYMENT_HASH: u8 = 1; // p
const TAG_ROUTE_HINT: u8 = 3; // r
const TAG_FEATURES: u8 = 5; // 9
const TAG_EXPIRY: u8 = 6; // x
const TAG_FALLBACK: u8 = 9; // f
const TAG_DESCRIPTION: u8 = 13; // d
const TAG_PAYMENT_SECRET: u8 = 16; // s
const TAG_PAYEE: u8 = 19; // n
const TAG_DESCRIPTION_HASH: u8 = 23; // h
const TAG_MIN_FINAL_CLTV: u8 = 24; // c

/// Decode a BOLT11 invoice string into its sections.
///
/// Pure function of its input. Fails on bad bech32, an unrecognized
/// human-readable prefix, or field boundaries that cannot be parsed.
/// Unrecognized tagged fields do not fail the decode; they are preserved
/// as `Section::Unknown` and reported by `Bolt11Invoice::unknown_tags`.
pub fn decode(invoice: &str) -> Result<Bolt11Invoice, DecodeError> {
    let (hrp, data, variant) = bech32::decode(invoice.trim())?;
    if variant != Variant::Bech32 {
        return Err(DecodeError::WrongVariant);
    }

    let ParsedHrp {
        currency,
        amount_msat,
    } = parse_hrp(&hrp)?;

    if data.len() < TIMESTAMP_GROUPS + SIGNATURE_GROUPS {
        return Err(DecodeError::Truncated);
    }
    let (payload, signature) = data.split_at(data.len() - SIGNATURE_GROUPS);
    let (time_groups, mut tagged) = payload.split_at(TIMESTAMP_GROUPS);

    let mut sections = Vec::new();
    if let Some(msat) = amount_msat {
        sections.push(Section::Amount(msat));
    }
    sections.push(Section::Timestamp(be_u64(time_groups)));

    while !tagged.is_empty() {
        if tagged.len() < 3 {
            return Err(DecodeError::Truncated);
        }
        let tag = tagged[0].to_u8();
        let len = tagged[1].to_u8() as usize * 32 + tagged[2].to_u8() as usize;
        if tagged.len() - 3 < len {
            return Err(DecodeError::TruncatedField { tag });
        }
        sections.push(parse_tagged(tag, &tagged[3..3 + len])?);
        tagged = &tagged[3 + len..];
    }

    sections.push(Section::Signature(to_bytes(signature)));

    Ok(Bolt11Invoice::from_sections(currency, sections))
}

/// Decode a single tagged field.
///
/// Fixed-size fields with an unexpected data_length are preserved opaque
/// rather than misread, per BOLT11's "MUST skip" rule.
fn parse_tagged(tag: u8, data: &[u5]) -> Result<Section, DecodeError> {
    let section = match tag {
        TAG_PAYMENT_HASH if data.len() == 52 => Section::PaymentHash(to_array(data)),
        TAG_PAYMENT_SECRET if data.len() == 52 => Section::PaymentSecret(to_array(data)),
        TAG_DESCRIPTION_HASH if data.len() == 52 => Section::DescriptionHash(to_array(data)),
        TAG_PAYEE if data.len() == 53 => Section::Payee(to_array(data)),
        TAG_DESCRIPTION => Section::Description(
            String::from_utf8(to_bytes(data)).map_err(|_| DecodeError::DescriptionNotUtf8)?,
        ),
        TAG_EXPIRY if data.len() <= 12 => Section::Expiry(be_u64(data)),
        TAG_MIN_FINAL_CLTV if data.len() <= 12 => Section::MinFinalCltvExpiry(be_u64(data)),
        TAG_FEATURES => Section::Features(groups(data)),
        TAG_FALLBACK if !data.is_empty() => Section::Fallback {
            version: data[0].to_u8(),
            program: to_bytes(&data[1..]),
        },
        TAG_ROUTE_HINT => Section::RouteHint(parse_route_hint(data)),
        _ => Section::Unknown {
            tag,
            data: groups(data),
        },
    };
    Ok(section)
}

fn parse_route_hint(data: &[u5]) -> Vec<RouteHop> {
    to_bytes(data)
        .chunks_exact(ROUTE_HOP_BYTES)
        .map(|hop| {
            let mut src_node_id = [0u8; 33];
            src_node_id.copy_from_slice(&hop[..33]);
            RouteHop {
                src_node_id,
                short_channel_id: be_bytes(&hop[33..41]),
                fee_base_msat: be_bytes(&hop[41..45]) as u32,
                fee_proportional_millionths: be_bytes(&hop[45..49]) as u32,
                cltv_expiry_delta: be_bytes(&hop[49..51]) as u16,
            }
        })
        .collect()
}

/// Big-endian integer from 5-bit groups; callers bound the group count
fn be_u64(data: &[u5]) -> u64 {
    data.iter()
        .fold(0, |acc, g| (acc << 5) | u64::from(g.to_u8()))
}

/// Big-endian integer from at most eight bytes
fn be_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

/// Repack 5-bit groups into bytes, dropping the trailing partial byte
fn to_bytes(data: &[u5]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for g in data {
        acc = (acc << 5) | u32::from(g.to_u8());
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    out
}

/// Fixed-size variant of `to_bytes`; callers guarantee the group count
/// packs to exactly `N` bytes
fn to_array<const N: usize>(data: &[u5]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&to_bytes(data));
    out
}

fn groups(data: &[u5]) -> Vec<u8> {
    data.iter().map(|g| g.to_u8()).collect()
}
