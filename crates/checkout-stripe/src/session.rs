//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API for one-time card
//! payments. This is the gateway's only payment flow.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutProvider, CheckoutResult, HostedSession, SessionRequest,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Stripe hosted-checkout provider
///
/// Uses Stripe's hosted checkout page for secure payments.
/// This is the recommended approach for PCI compliance.
pub struct StripeCheckoutProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutProvider {
    /// Create a new Stripe checkout provider
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(StripeConfig::from_env())
    }

    /// Build the form body for the Checkout Sessions endpoint.
    ///
    /// One quantity-1 line item, payment mode, card only. Stripe takes
    /// indexed bracket keys rather than JSON.
    fn build_form(request: &SessionRequest) -> Vec<(String, String)> {
        vec![
            ("mode".to_string(), "payment".to_string()),
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
            (
                "line_items[0][price_data][currency]".to_string(),
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                request.amount_minor.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                request.description.clone(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
        ]
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutProvider {
    #[instrument(skip(self, request), fields(amount = request.amount_minor, currency = %request.currency))]
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<HostedSession> {
        let form = Self::build_form(request);

        debug!(
            "Creating Stripe checkout session: amount={} {}",
            request.amount_minor, request.currency
        );

        // One session attempt per idempotency key; Stripe dedupes retries
        let idempotency_key = Uuid::new_v4().to_string();

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe's structured error when possible
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(CheckoutError::Provider {
                    kind: error_response.error.error_type,
                    message: error_response.error.message,
                    code: error_response.error.code,
                });
            }

            return Err(CheckoutError::Provider {
                kind: None,
                message: format!("HTTP {}: {}", status, body),
                code: None,
            });
        }

        let session_response: StripeSessionResponse =
            serde_json::from_str(&body).map_err(|e| {
                CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!("Created Stripe checkout session: id={}", session_response.id);

        Ok(HostedSession {
            session_id: session_response.id,
            checkout_url: session_response.url,
            expires_at: session_response
                .expires_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            created_at: Utc::now(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}
