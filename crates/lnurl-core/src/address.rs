//! # Lightning Address
//!
//! Parsing of `user@domain` Lightning Addresses and derivation of the
//! LNURL-pay well-known endpoint (LUD-16).

use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed Lightning Address of the form `user@domain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightningAddress {
    user: String,
    domain: String,
}

impl LightningAddress {
    /// The local part before the `@`
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The domain part after the `@`
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The LNURL-pay endpoint for this address:
    /// `https://{domain}/.well-known/lnurlp/{user}`
    pub fn well_known_url(&self) -> String {
        format!(
            "https://{}/.well-known/lnurlp/{}",
            self.domain, self.user
        )
    }
}

impl FromStr for LightningAddress {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (user, domain) = s
            .split_once('@')
            .ok_or_else(|| RelayError::InvalidAddress(format!("missing '@' in {s:?}")))?;

        if user.is_empty() || domain.is_empty() {
            return Err(RelayError::InvalidAddress(format!(
                "empty user or domain in {s:?}"
            )));
        }

        if domain.contains('@') {
            return Err(RelayError::InvalidAddress(format!(
                "more than one '@' in {s:?}"
            )));
        }

        // Reject characters that would change the meaning of the derived URL
        if s.chars().any(char::is_whitespace) || user.contains('/') || domain.contains('/') {
            return Err(RelayError::InvalidAddress(format!(
                "illegal character in {s:?}"
            )));
        }

        Ok(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let addr: LightningAddress = "alice@wallet.example".parse().unwrap();
        assert_eq!(addr.user(), "alice");
        assert_eq!(addr.domain(), "wallet.example");
        assert_eq!(addr.to_string(), "alice@wallet.example");
    }

    #[test]
    fn test_well_known_url() {
        let addr: LightningAddress = "alice@wallet.example".parse().unwrap();
        assert_eq!(
            addr.well_known_url(),
            "https://wallet.example/.well-known/lnurlp/alice"
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr: LightningAddress = "  bob@node.example.org ".parse().unwrap();
        assert_eq!(addr.user(), "bob");
        assert_eq!(addr.domain(), "node.example.org");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "",
            "alice",
            "@wallet.example",
            "alice@",
            "alice@wallet@example",
            "al ice@wallet.example",
            "alice@wallet.example/path",
        ] {
            let result: Result<LightningAddress, _> = bad.parse();
            assert!(result.is_err(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn test_rejection_is_invalid_address() {
        let err = "not-an-address".parse::<LightningAddress>().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(matches!(err, RelayError::InvalidAddress(_)));
    }
}
