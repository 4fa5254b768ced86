//! # Amount Units
//!
//! Millisatoshi and satoshi newtypes for the relay.
//!
//! LNURL-pay endpoints speak millisatoshi on the wire; the relay's own
//! contract with its callers is satoshi. These types keep the two units
//! from being mixed up and centralize the conversions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Millisatoshi per satoshi
pub const MSAT_PER_SAT: u64 = 1000;

/// An amount in millisatoshi (1/1000 of a satoshi)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Msats(pub u64);

impl Msats {
    /// Convert to whole satoshi, dropping any sub-satoshi remainder
    pub fn to_sats(self) -> Sats {
        Sats(self.0 / MSAT_PER_SAT)
    }
}

impl fmt::Display for Msats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} msat", self.0)
    }
}

/// An amount in satoshi
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Sats(pub u64);

impl Sats {
    /// Convert to millisatoshi.
    ///
    /// Saturates at `u64::MAX`; every representable on-chain amount is far
    /// below that bound.
    pub fn to_msats(self) -> Msats {
        Msats(self.0.saturating_mul(MSAT_PER_SAT))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Sats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}
