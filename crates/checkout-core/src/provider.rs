//! # Checkout Provider Trait
//!
//! Seam between the HTTP layer and payment providers. The gateway ships
//! with Stripe; the trait keeps the handler independent of the provider's
//! wire format and lets tests substitute a stub.

use crate::error::CheckoutResult;
use crate::order::{HostedSession, SessionRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a one-time-payment hosted checkout session.
    ///
    /// # Arguments
    /// * `request` - The single line item plus redirect URLs
    ///
    /// # Returns
    /// A `HostedSession` whose `session_id` the client redirects to.
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<HostedSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;
