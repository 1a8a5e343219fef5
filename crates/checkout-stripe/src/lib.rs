//! # checkout-stripe
//!
//! Stripe hosted-checkout provider for the checkout gateway.
//!
//! Talks to the Stripe Checkout Sessions REST API directly over `reqwest`
//! (form-encoded, like the official SDKs) rather than through a vendor
//! crate, so the request the gateway sends is exactly the request Stripe
//! receives.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_stripe::StripeCheckoutProvider;
//! use checkout_core::{CheckoutProvider, SessionRequest};
//!
//! // Create provider from environment (STRIPE_SECRET_KEY)
//! let provider = StripeCheckoutProvider::from_env();
//!
//! // Create a hosted session
//! let session = provider.create_session(&request).await?;
//!
//! // Hand session.session_id to the storefront for redirect
//! ```

pub mod config;
pub mod session;

// Re-exports
pub use config::StripeConfig;
pub use session::StripeCheckoutProvider;
