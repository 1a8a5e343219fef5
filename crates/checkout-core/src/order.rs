//! # Order Types
//!
//! Validation and normalization of inbound order payloads, plus the
//! session types exchanged with a payment provider.

use crate::error::{CheckoutError, CheckoutResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum line-item description length accepted by the provider
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Currency used when the client omits one
pub const DEFAULT_CURRENCY: &str = "eur";

/// A validated, normalized order ready to be turned into a provider request.
///
/// Never persisted: the gateway is stateless and each order lives for the
/// duration of a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Amount in the currency's minor unit (e.g. cents for euros)
    pub amount_minor: i64,

    /// Lowercased ISO 4217 currency code
    pub currency: String,

    /// Order summary, truncated to [`MAX_DESCRIPTION_CHARS`].
    /// `None` when the client sent no summary (or an empty one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CheckoutOrder {
    /// Validate and normalize a raw order payload.
    ///
    /// * `total` is the amount in major currency units; it must be finite
    ///   and strictly positive, otherwise `InvalidTotal` is returned and no
    ///   provider call may be made.
    /// * `currency` defaults to [`DEFAULT_CURRENCY`] and is lowercased.
    /// * `summary` is truncated to [`MAX_DESCRIPTION_CHARS`] characters;
    ///   empty summaries are treated as absent.
    pub fn new(
        total: Option<f64>,
        currency: Option<&str>,
        summary: Option<&str>,
    ) -> CheckoutResult<Self> {
        let total = match total {
            Some(t) if t.is_finite() && t > 0.0 => t,
            _ => return Err(CheckoutError::InvalidTotal),
        };

        let currency = match currency {
            Some(c) if !c.trim().is_empty() => c.trim().to_lowercase(),
            _ => DEFAULT_CURRENCY.to_string(),
        };

        let description = summary
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().take(MAX_DESCRIPTION_CHARS).collect());

        Ok(Self {
            amount_minor: (total * 100.0).round() as i64,
            currency,
            description,
        })
    }

    /// The line-item description: the truncated summary, or `fallback`
    /// when the client sent none.
    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description.as_deref().unwrap_or(fallback)
    }
}

/// Everything a provider needs to create a hosted checkout session:
/// one quantity-1 line item plus the two redirect destinations.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest {
    /// Amount in minor units
    pub amount_minor: i64,

    /// Lowercased currency code
    pub currency: String,

    /// Fixed product name shown on the hosted page
    pub product_name: String,

    /// Line-item description (summary or placeholder)
    pub description: String,

    /// Redirect after successful payment
    pub success_url: String,

    /// Redirect when the customer cancels
    pub cancel_url: String,
}

/// A hosted checkout session created by a payment provider.
///
/// Only `session_id` is returned to the client; the rest is kept for
/// logging and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedSession {
    /// Provider's session ID
    pub session_id: String,

    /// URL of the provider-hosted payment page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,

    /// When the session expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl HostedSession {
    /// Create a new hosted session record
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            checkout_url: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the session is still redeemable
    pub fn is_active(&self) -> bool {
        self.expires_at.map(|exp| exp > Utc::now()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_rounding() {
        let order = CheckoutOrder::new(Some(19.99), None, None).unwrap();
        assert_eq!(order.amount_minor, 1999);

        let order = CheckoutOrder::new(Some(10.0), None, None).unwrap();
        assert_eq!(order.amount_minor, 1000);

        // Binary float artifacts must round, not truncate
        let order = CheckoutOrder::new(Some(0.1 + 0.2), None, None).unwrap();
        assert_eq!(order.amount_minor, 30);
    }

    #[test]
    fn test_total_must_be_strictly_positive() {
        assert!(matches!(
            CheckoutOrder::new(None, None, None),
            Err(CheckoutError::InvalidTotal)
        ));
        assert!(matches!(
            CheckoutOrder::new(Some(0.0), None, None),
            Err(CheckoutError::InvalidTotal)
        ));
        assert!(matches!(
            CheckoutOrder::new(Some(-5.0), None, None),
            Err(CheckoutError::InvalidTotal)
        ));
        assert!(matches!(
            CheckoutOrder::new(Some(f64::NAN), None, None),
            Err(CheckoutError::InvalidTotal)
        ));
        assert!(matches!(
            CheckoutOrder::new(Some(f64::INFINITY), None, None),
            Err(CheckoutError::InvalidTotal)
        ));
    }

    #[test]
    fn test_currency_normalization() {
        let order = CheckoutOrder::new(Some(1.0), Some("USD"), None).unwrap();
        assert_eq!(order.currency, "usd");

        let order = CheckoutOrder::new(Some(1.0), Some("ChF"), None).unwrap();
        assert_eq!(order.currency, "chf");

        // Omitted or blank falls back to the default
        let order = CheckoutOrder::new(Some(1.0), None, None).unwrap();
        assert_eq!(order.currency, "eur");

        let order = CheckoutOrder::new(Some(1.0), Some("  "), None).unwrap();
        assert_eq!(order.currency, "eur");
    }

    #[test]
    fn test_summary_truncation() {
        let long = "x".repeat(800);
        let order = CheckoutOrder::new(Some(1.0), None, Some(&long)).unwrap();
        assert_eq!(order.description.as_deref().unwrap().chars().count(), 500);

        let short = "2x cornetti, 1x torta";
        let order = CheckoutOrder::new(Some(1.0), None, Some(short)).unwrap();
        assert_eq!(order.description.as_deref(), Some(short));
    }

    #[test]
    fn test_summary_truncation_multibyte() {
        // Truncation must count characters, not bytes
        let long = "è".repeat(600);
        let order = CheckoutOrder::new(Some(1.0), None, Some(&long)).unwrap();
        assert_eq!(order.description.as_deref().unwrap().chars().count(), 500);
    }

    #[test]
    fn test_description_fallback() {
        let order = CheckoutOrder::new(Some(1.0), None, None).unwrap();
        assert_eq!(order.description_or("Ordine online"), "Ordine online");

        // Empty summary is treated as absent
        let order = CheckoutOrder::new(Some(1.0), None, Some("")).unwrap();
        assert_eq!(order.description_or("Ordine online"), "Ordine online");

        let order = CheckoutOrder::new(Some(1.0), None, Some("torta")).unwrap();
        assert_eq!(order.description_or("Ordine online"), "torta");
    }

    #[test]
    fn test_hosted_session_active() {
        let session = HostedSession::new("cs_test_123");
        assert!(session.is_active());

        let expired = HostedSession {
            expires_at: Some(Utc::now() - chrono::Duration::hours(1)),
            ..HostedSession::new("cs_test_456")
        };
        assert!(!expired.is_active());
    }
}
