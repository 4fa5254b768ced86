//! # Human-Readable Part
//!
//! Parsing of the BOLT11 prefix: `ln`, a currency identifier, and an
//! optional amount with a multiplier (`m`/`u`/`n`/`p`).

use crate::error::DecodeError;

/// Millisatoshi per whole bitcoin
const MSAT_PER_BTC: u64 = 100_000_000_000;

/// Network a BOLT11 invoice is payable on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// `bc` - mainnet
    Bitcoin,
    /// `tb` - testnet
    Testnet,
    /// `tbs` - signet
    Signet,
    /// `bcrt` - regtest
    Regtest,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bitcoin => "bc",
            Currency::Testnet => "tb",
            Currency::Signet => "tbs",
            Currency::Regtest => "bcrt",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "bc" => Some(Currency::Bitcoin),
            "tb" => Some(Currency::Testnet),
            "tbs" => Some(Currency::Signet),
            "bcrt" => Some(Currency::Regtest),
            _ => None,
        }
    }
}

/// Decoded human-readable part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedHrp {
    pub currency: Currency,
    pub amount_msat: Option<u64>,
}

/// Parse `ln{currency}{amount?}` into currency and millisatoshi amount
pub(crate) fn parse_hrp(hrp: &str) -> Result<ParsedHrp, DecodeError> {
    let rest = hrp
        .strip_prefix("ln")
        .ok_or_else(|| DecodeError::MissingLnPrefix(hrp.to_string()))?;

    let split = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (code, amount) = rest.split_at(split);

    let currency =
        Currency::from_code(code).ok_or_else(|| DecodeError::UnknownCurrency(code.to_string()))?;

    let amount_msat = if amount.is_empty() {
        None
    } else {
        Some(parse_amount(amount)?)
    };

    Ok(ParsedHrp {
        currency,
        amount_msat,
    })
}

/// Parse the amount part (digits plus optional multiplier) to millisatoshi
fn parse_amount(amount: &str) -> Result<u64, DecodeError> {
    let bad = || DecodeError::InvalidAmount(amount.to_string());

    let (digits, multiplier) = match amount.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&amount[..amount.len() - 1], Some(c)),
        _ => (amount, None),
    };

    if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
        return Err(bad());
    }

    let value: u64 = digits.parse().map_err(|_| bad())?;

    let msat = match multiplier {
        None => value.checked_mul(MSAT_PER_BTC),
        Some('m') => value.checked_mul(MSAT_PER_BTC / 1_000),
        Some('u') => value.checked_mul(MSAT_PER_BTC / 1_000_000),
        Some('n') => value.checked_mul(MSAT_PER_BTC / 1_000_000_000),
        Some('p') => {
            // pico-bitcoin is a tenth of a millisatoshi
            if value % 10 != 0 {
                return Err(bad());
            }
            Some(value / 10)
        }
        Some(_) => return Err(bad()),
    };

    msat.ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currencies() {
        assert_eq!(parse_hrp("lnbc").unwrap().currency, Currency::Bitcoin);
        assert_eq!(parse_hrp("lntb").unwrap().currency, Currency::Testnet);
        assert_eq!(parse_hrp("lntbs").unwrap().currency, Currency::Signet);
        assert_eq!(parse_hrp("lnbcrt").unwrap().currency, Currency::Regtest);
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(parse_hrp("lnbc").unwrap().amount_msat, None);
    }

    #[test]
    fn test_amounts() {
        // 20m = 0.02 BTC
        assert_eq!(
            parse_hrp("lnbc20m").unwrap().amount_msat,
            Some(2_000_000_000)
        );
        // 2500u = 0.0025 BTC
        assert_eq!(
            parse_hrp("lnbc2500u").unwrap().amount_msat,
            Some(250_000_000)
        );
        // 100n = 10 sat
        assert_eq!(parse_hrp("lnbc100n").unwrap().amount_msat, Some(10_000));
        // 10p = 1 msat
        assert_eq!(parse_hrp("lnbc10p").unwrap().amount_msat, Some(1));
        // whole bitcoin, no multiplier
        assert_eq!(
            parse_hrp("lnbc2").unwrap().amount_msat,
            Some(200_000_000_000)
        );
    }

    #[test]
    fn test_bad_prefix() {
        assert_eq!(
            parse_hrp("xx1").unwrap_err(),
            DecodeError::MissingLnPrefix("xx1".to_string())
        );
        assert_eq!(
            parse_hrp("lnxx20m").unwrap_err(),
            DecodeError::UnknownCurrency("xx".to_string())
        );
    }

    #[test]
    fn test_bad_amounts() {
        // unknown multiplier
        assert!(matches!(
            parse_hrp("lnbc21x"),
            Err(DecodeError::InvalidAmount(_))
        ));
        // leading zero
        assert!(matches!(
            parse_hrp("lnbc0500u"),
            Err(DecodeError::InvalidAmount(_))
        ));
        // pico amount not a multiple of 10
        assert!(matches!(
            parse_hrp("lnbc9p"),
            Err(DecodeError::InvalidAmount(_))
        ));
        // digits inside the multiplier position
        assert!(matches!(
            parse_hrp("lnbc2m3"),
            Err(DecodeError::InvalidAmount(_))
        ));
    }
}
