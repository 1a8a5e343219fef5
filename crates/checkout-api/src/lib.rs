//! # checkout-api
//!
//! HTTP layer for the checkout gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The session-creation endpoint used by the storefront
//! - CORS origin allow-listing for browser clients
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness check |
//! | GET | `/health` | Liveness check (alias) |
//! | POST | `/create-stripe-session` | Create a hosted checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, GatewayConfig};
