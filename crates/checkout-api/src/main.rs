//! # Checkout Gateway
//!
//! Storefront payment backend: validates an order total and creates a
//! Stripe hosted checkout session for the client to redirect to.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export PORT=10000
//!
//! # Run the server
//! checkout-gateway
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());
    info!(
        "Allowed origins: {}",
        state.gateway.allowed_origins.join(", ")
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Checkout gateway starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
