//! # Application State
//!
//! Shared state for the Axum application: the configured payment provider
//! and the gateway configuration (redirect URLs, CORS allow-list, line-item
//! branding).

use checkout_core::BoxedCheckoutProvider;
use checkout_stripe::StripeCheckoutProvider;
use serde::Deserialize;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Storefront-facing gateway configuration.
///
/// Loaded from `config/gateway.toml` when present; the defaults match the
/// production storefront so the binary runs without a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Fixed product name shown on the hosted checkout page
    pub product_name: String,
    /// Line-item description used when the order has no summary
    pub fallback_description: String,
    /// Redirect after successful payment
    pub success_url: String,
    /// Redirect when the customer cancels
    pub cancel_url: String,
    /// Origins allowed to call the gateway from a browser
    pub allowed_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            product_name: "Ordine Pasticceria della Nonna".to_string(),
            fallback_description: "Ordine online".to_string(),
            success_url: "https://pasticceriadellanonnaincammino.it/grazie.html?stripe=ok"
                .to_string(),
            cancel_url: "https://pasticceriadellanonnaincammino.it/pagamento-annullato.html"
                .to_string(),
            allowed_origins: vec![
                "https://pasticceriadellanonnaincammino.it".to_string(),
                "https://www.pasticceriadellanonnaincammino.it".to_string(),
            ],
        }
    }
}

impl GatewayConfig {
    /// Load gateway configuration from `config/gateway.toml`, falling back
    /// to the built-in defaults when no file is found.
    pub fn load() -> anyhow::Result<Self> {
        let config_paths = [
            "config/gateway.toml",
            "../config/gateway.toml",
            "../../config/gateway.toml",
        ];

        for path in config_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                let config: GatewayConfig = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
                tracing::info!("Loaded gateway config from {}", path);
                return Ok(config);
            }
        }

        tracing::info!("No gateway config found, using built-in defaults");
        Ok(Self::default())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configured payment provider, built once and shared read-only
    pub provider: BoxedCheckoutProvider,
    /// Gateway configuration
    pub gateway: Arc<GatewayConfig>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Stripe provider from environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let gateway = Arc::new(GatewayConfig::load()?);
        let provider: BoxedCheckoutProvider = Arc::new(StripeCheckoutProvider::from_env());

        Ok(Self {
            provider,
            gateway,
            config,
        })
    }

    /// Create state with an explicit provider and gateway config (for tests)
    pub fn with_provider(provider: BoxedCheckoutProvider, gateway: GatewayConfig) -> Self {
        Self {
            provider,
            gateway: Arc::new(gateway),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert!(!config.is_production());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_gateway_config_defaults() {
        let gateway = GatewayConfig::default();
        assert_eq!(gateway.fallback_description, "Ordine online");
        assert_eq!(gateway.allowed_origins.len(), 2);
        assert!(gateway
            .allowed_origins
            .iter()
            .any(|o| o.starts_with("https://www.")));
    }

    #[test]
    fn test_gateway_config_partial_toml() {
        // Fields absent from the file keep their defaults
        let gateway: GatewayConfig =
            toml::from_str(r#"allowed_origins = ["https://shop.example"]"#).unwrap();
        assert_eq!(gateway.allowed_origins, vec!["https://shop.example"]);
        assert_eq!(gateway.product_name, "Ordine Pasticceria della Nonna");
    }
}
