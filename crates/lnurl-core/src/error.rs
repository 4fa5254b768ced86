//! # Relay Error Types
//!
//! Typed error handling for the LNURL-pay relay.
//! All relay operations return `Result<T, RelayError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lightning Address could not be parsed
    #[error("Invalid Lightning Address: {0}")]
    InvalidAddress(String),

    /// Invalid request data (zero amount, bad callback URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure reaching the upstream endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream endpoint answered with a non-success status
    #[error("Upstream returned HTTP {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Upstream answered 2xx but the body is unusable
    /// (missing `callback`/`pr`, wrong `tag`, unparsable JSON)
    #[error("Bad upstream response: {0}")]
    BadUpstreamResponse(String),

    /// Upstream handed us a BOLT11 invoice we could not decode
    #[error("Malformed invoice: {0}")]
    MalformedInvoice(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RelayError::Network(_) | RelayError::UpstreamStatus { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) => 500,
            RelayError::InvalidAddress(_) => 400,
            RelayError::InvalidRequest(_) => 400,
            RelayError::Network(_) => 503,
            RelayError::UpstreamStatus { .. } => 502,
            RelayError::BadUpstreamResponse(_) => 502,
            RelayError::MalformedInvoice(_) => 502,
            RelayError::Internal(_) => 500,
        }
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RelayError::Network("timeout".into()).is_retryable());
        assert!(RelayError::UpstreamStatus {
            status: 500,
            message: "oops".into()
        }
        .is_retryable());
        assert!(!RelayError::InvalidAddress("bad".into()).is_retryable());
        assert!(!RelayError::BadUpstreamResponse("no callback".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::InvalidAddress("x".into()).status_code(), 400);
        assert_eq!(RelayError::InvalidRequest("x".into()).status_code(), 400);
        assert_eq!(RelayError::Network("x".into()).status_code(), 503);
        assert_eq!(
            RelayError::UpstreamStatus {
                status: 404,
                message: "not found".into()
            }
            .status_code(),
            502
        );
        assert_eq!(RelayError::MalformedInvoice("x".into()).status_code(), 502);
        assert_eq!(RelayError::Configuration("x".into()).status_code(), 500);
        assert_eq!(RelayError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_display() {
        let err = RelayError::UpstreamStatus {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "Upstream returned HTTP 404: not found");
    }
}
