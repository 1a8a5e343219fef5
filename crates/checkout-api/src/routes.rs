//! # Routes
//!
//! Axum router configuration for the checkout gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer from the configured origin allow-list.
///
/// Only listed origins receive permissive headers; preflight requests from
/// anywhere else are left to the browser's own CORS enforcement. No
/// wildcard: the gateway is called from known storefront domains only.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Create the main application router
///
/// Routes:
/// - GET  /                       - Liveness check
/// - GET  /health                 - Liveness check (alias)
/// - POST /create-stripe-session  - Create a hosted checkout session
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.gateway.allowed_origins);

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route(
            "/create-stripe-session",
            post(handlers::create_stripe_session),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Origins with invalid header bytes are dropped, not panicked on
        let _layer = cors_layer(&["https://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
