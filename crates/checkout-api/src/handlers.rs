//! # Request Handlers
//!
//! Axum request handlers for the checkout gateway.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use checkout_core::{CheckoutError, CheckoutOrder, SessionRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create session request, field names as the storefront sends them
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Order total in major currency units
    #[serde(default)]
    pub totale: Option<f64>,
    /// ISO 4217 currency code (optional, defaults to EUR)
    #[serde(default)]
    pub valuta: Option<String>,
    /// Free-text order summary (optional)
    #[serde(default)]
    pub riepilogo: Option<String>,
}

/// Create session response
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    /// Provider session ID the storefront redirects to
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_type: None,
            message: None,
            code: None,
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let response = match err {
        CheckoutError::InvalidTotal => ErrorResponse::new("Totale non valido"),
        CheckoutError::Provider {
            kind,
            message,
            code,
        } => ErrorResponse {
            error: "Errore Stripe".to_string(),
            error_type: kind,
            message: Some(message),
            code,
        },
        other => ErrorResponse {
            error: "Errore Stripe".to_string(),
            error_type: None,
            message: Some(other.to_string()),
            code: None,
        },
    };

    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness endpoint. Always up, independent of provider credentials.
pub async fn health() -> &'static str {
    "✅ Stripe backend attivo"
}

/// Create a hosted checkout session for the storefront order
#[instrument(skip(state, payload))]
pub async fn create_stripe_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<Json<CreateSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Strict body validation: a non-JSON body or wrongly-typed field is a
    // client error, distinct from a non-positive total
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected malformed body: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Richiesta non valida")),
        )
    })?;

    // Validate before any provider call
    let order = CheckoutOrder::new(
        request.totale,
        request.valuta.as_deref(),
        request.riepilogo.as_deref(),
    )
    .map_err(checkout_error_to_response)?;

    let gateway = &state.gateway;
    let session_request = SessionRequest {
        amount_minor: order.amount_minor,
        currency: order.currency.clone(),
        product_name: gateway.product_name.clone(),
        description: order
            .description_or(&gateway.fallback_description)
            .to_string(),
        success_url: gateway.success_url.clone(),
        cancel_url: gateway.cancel_url.clone(),
    };

    info!(
        "Creating checkout session: amount={} {}",
        session_request.amount_minor, session_request.currency
    );

    let session = state
        .provider
        .create_session(&session_request)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            checkout_error_to_response(e)
        })?;

    info!("Created checkout session: {}", session.session_id);

    Ok(Json(CreateSessionResponse {
        session_id: session.session_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_minimal_shape() {
        let err = ErrorResponse::new("Totale non valido");
        let json = serde_json::to_value(&err).unwrap();

        // Optional diagnostics must not appear on validation errors
        assert_eq!(json, serde_json::json!({ "error": "Totale non valido" }));
    }

    #[test]
    fn test_invalid_total_conversion() {
        let (status, Json(body)) = checkout_error_to_response(CheckoutError::InvalidTotal);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Totale non valido");
        assert!(body.message.is_none());
    }

    #[test]
    fn test_provider_error_conversion() {
        let err = CheckoutError::Provider {
            kind: Some("api_error".into()),
            message: "key expired".into(),
            code: Some("api_key_expired".into()),
        };
        let (status, Json(body)) = checkout_error_to_response(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Errore Stripe");
        assert_eq!(body.error_type.as_deref(), Some("api_error"));
        assert_eq!(body.message.as_deref(), Some("key expired"));
        assert_eq!(body.code.as_deref(), Some("api_key_expired"));
    }

    #[test]
    fn test_session_response_wire_name() {
        let response = CreateSessionResponse {
            session_id: "cs_test_123".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "sessionId": "cs_test_123" }));
    }

    #[test]
    fn test_request_accepts_partial_body() {
        let request: CreateSessionRequest = serde_json::from_str(r#"{"totale": 12.5}"#).unwrap();
        assert_eq!(request.totale, Some(12.5));
        assert!(request.valuta.is_none());
        assert!(request.riepilogo.is_none());
    }

    #[test]
    fn test_request_rejects_wrong_types() {
        let result = serde_json::from_str::<CreateSessionRequest>(r#"{"totale": "12.5"}"#);
        assert!(result.is_err());
    }
}
