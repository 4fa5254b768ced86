//! # Client Configuration
//!
//! Configuration for the outbound LNURL HTTP client.
//! Everything is optional and loaded from environment variables with
//! defaults; there are no secrets in this flow.

use std::env;
use std::time::Duration;

/// Default timeout for each outbound request, in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Outbound HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout applied to each outbound request, in seconds
    pub timeout_secs: u64,

    /// User-Agent header for outbound requests
    pub user_agent: String,

    /// Override for the resolution endpoint base URL (for testing/mocking).
    /// When unset, endpoints derive from the Lightning Address domain.
    pub endpoint_base: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized env vars:
    /// - `LNURL_HTTP_TIMEOUT_SECS` (default 30)
    /// - `LNURL_HTTP_USER_AGENT` (default `lnurl-relay/{version}`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            timeout_secs: env::var("LNURL_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            user_agent: env::var("LNURL_HTTP_USER_AGENT")
                .unwrap_or_else(|_| format!("lnurl-relay/{}", env!("CARGO_PKG_VERSION"))),
            endpoint_base: None,
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builder: set a custom endpoint base URL (for testing)
    pub fn with_endpoint_base(mut self, base: impl Into<String>) -> Self {
        self.endpoint_base = Some(base.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        env::remove_var("LNURL_HTTP_TIMEOUT_SECS");
        env::remove_var("LNURL_HTTP_USER_AGENT");

        let config = ClientConfig::from_env();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("lnurl-relay/"));
        assert!(config.endpoint_base.is_none());
    }

    #[test]
    fn test_endpoint_base_builder() {
        let config = ClientConfig {
            timeout_secs: 5,
            user_agent: "test".to_string(),
            endpoint_base: None,
        }
        .with_endpoint_base("http://127.0.0.1:8099");

        assert_eq!(
            config.endpoint_base.as_deref(),
            Some("http://127.0.0.1:8099")
        );
    }
}
