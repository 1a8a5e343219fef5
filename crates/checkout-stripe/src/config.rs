//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! The secret key is loaded from the environment.

use std::env;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    const DEFAULT_API_BASE_URL: &'static str = "https://api.stripe.com";
    const API_VERSION: &'static str = "2024-12-18.acacia";

    /// Load configuration from environment variables.
    ///
    /// Reads `STRIPE_SECRET_KEY`. A missing key does not stop the gateway
    /// from starting; the liveness endpoint must stay up regardless, and
    /// session creation fails at call time with Stripe's own
    /// authentication error.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();

        if secret_key.is_empty() {
            tracing::warn!("STRIPE_SECRET_KEY not set, session creation will fail");
        } else if !secret_key.starts_with("sk_test_") && !secret_key.starts_with("sk_live_") {
            tracing::warn!("STRIPE_SECRET_KEY does not look like a Stripe secret key");
        }

        Self::new(secret_key)
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            api_version: Self::API_VERSION.to_string(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mode_detection() {
        let config = StripeConfig::new("sk_test_abc123");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = StripeConfig::new("sk_live_abc123");
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_custom_base_url() {
        let config = StripeConfig::new("sk_test_abc123").with_api_base_url("http://127.0.0.1:9");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9");
        assert_eq!(config.api_version, StripeConfig::API_VERSION);
    }
}
