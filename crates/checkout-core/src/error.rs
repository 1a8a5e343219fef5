//! # Checkout Error Types
//!
//! Typed error handling for the checkout gateway.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order total is missing, zero, or negative
    #[error("Totale non valido")]
    InvalidTotal,

    /// Payment provider rejected the session-creation request
    #[error("Provider error [{kind:?}]: {message}")]
    Provider {
        /// Provider's error category (e.g. "invalid_request_error")
        kind: Option<String>,
        /// Human-readable provider message
        message: String,
        /// Provider-specific diagnostic code (e.g. "amount_too_small")
        code: Option<String>,
    },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Unparseable provider response
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidTotal => 400,
            CheckoutError::Provider { .. } => 500,
            CheckoutError::Network(_) => 500,
            CheckoutError::Serialization(_) => 500,
        }
    }

    /// Returns true if validation failed before any provider call
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CheckoutError::InvalidTotal.status_code(), 400);
        assert_eq!(
            CheckoutError::Provider {
                kind: Some("api_error".into()),
                message: "boom".into(),
                code: None,
            }
            .status_code(),
            500
        );
        assert_eq!(CheckoutError::Network("timeout".into()).status_code(), 500);
    }

    #[test]
    fn test_invalid_total_message() {
        // The fixed message is part of the client contract.
        assert_eq!(CheckoutError::InvalidTotal.to_string(), "Totale non valido");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(CheckoutError::InvalidTotal.is_client_error());
        assert!(!CheckoutError::Network("refused".into()).is_client_error());
    }
}
