//! # checkout-core
//!
//! Core types and traits for the checkout gateway.
//!
//! This crate provides:
//! - `CheckoutOrder` for validating and normalizing inbound order payloads
//! - `SessionRequest` and `HostedSession` for the hosted-checkout flow
//! - `CheckoutProvider` trait for implementing payment providers
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutOrder, SessionRequest};
//!
//! // Validate the inbound payload
//! let order = CheckoutOrder::new(Some(19.99), Some("EUR"), Some("2x cornetti"))?;
//!
//! // Build the provider request
//! let request = SessionRequest {
//!     amount_minor: order.amount_minor,
//!     currency: order.currency.clone(),
//!     product_name: "Ordine Pasticceria della Nonna".into(),
//!     description: order.description_or("Ordine online").to_string(),
//!     success_url: success_url.into(),
//!     cancel_url: cancel_url.into(),
//! };
//!
//! // Create the hosted session via a provider
//! let session = provider.create_session(&request).await?;
//!
//! // Hand session.session_id back to the client for redirect
//! ```

pub mod error;
pub mod order;
pub mod provider;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use order::{CheckoutOrder, HostedSession, SessionRequest};
pub use provider::{BoxedCheckoutProvider, CheckoutProvider};
