//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`.
//!
//! Note on status codes: the API deliberately answers 401 for both
//! missing-credential and wrong-role failures. Clients only ever see
//! `{"message": "Unauthorized access"}` for either case.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::stripe::StripeError;

/// Application-level error type for the marketplace API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Payment processor operation failed.
    #[error("Stripe error: {0}")]
    PaymentGateway(#[from] StripeError),

    /// Missing, malformed, expired, or signature-invalid credential.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Authenticated but the persisted role does not match.
    #[error("Forbidden")]
    Forbidden,

    /// Referenced entity absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The checkout transaction was aborted and rolled back.
    #[error("Checkout failed")]
    CheckoutFailed,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Database(_) | Self::Internal(_) | Self::PaymentGateway(_) | Self::CheckoutFailed
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::CheckoutFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::PaymentGateway(_) => StatusCode::BAD_GATEWAY,
            // Wrong-role failures reuse 401, matching the original contract
            Self::Unauthenticated | Self::Forbidden => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Database(_) | Self::Internal(_) | Self::CheckoutFailed => {
                json!({ "error": "Internal Server Error" })
            }
            Self::PaymentGateway(_) => json!({ "error": "Payment processor error" }),
            Self::Unauthenticated | Self::Forbidden => {
                json!({ "message": "Unauthorized access" })
            }
            Self::NotFound(message) => json!({ "message": message }),
            Self::Validation(message) => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Payment not found".to_string());
        assert_eq!(err.to_string(), "Not found: Payment not found");

        let err = AppError::Validation("Invalid price value".to_string());
        assert_eq!(err.to_string(), "Validation error: Invalid price value");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::CheckoutFailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wrong_role_uses_unauthorized_status() {
        // The contract answers 401 for role failures, not 403
        assert_eq!(get_status(AppError::Forbidden), StatusCode::UNAUTHORIZED);
    }
}
