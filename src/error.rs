//! Error types for the Enercam contact pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling,
//! plus the mapping from pipeline failures onto the HTTP contract of the contact endpoint.

use crate::validation::FieldErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur when talking to the email provider API.
#[derive(Error, Debug)]
pub enum EmailApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API key rejected
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider refused the message (bad sender, malformed recipient, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic provider error with context
    #[error("Email provider error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors from the two-email delivery sequence on the server side.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The staff notification failed; the acknowledgment was never attempted.
    #[error("Notification email failed: {0}")]
    NotificationFailed(#[source] EmailApiError),

    /// Staff were notified but the submitter's acknowledgment failed.
    #[error("Acknowledgment email failed after notification {notification_id} was sent: {source}")]
    PartialDelivery {
        notification_id: String,
        #[source]
        source: EmailApiError,
    },
}

impl DeliveryError {
    /// Whether staff received the notification before the failure.
    pub fn is_partial(&self) -> bool {
        matches!(self, DeliveryError::PartialDelivery { .. })
    }
}

/// Errors reported to the client-side form by a delivery strategy.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered with an error body
    #[error("Submission rejected (status {status}): {error}")]
    Rejected {
        status: u16,
        error: String,
        details: FieldErrors,
    },

    /// The endpoint could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with something that is not the expected contract
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Failures of the public contact endpoints, mapped onto HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Email credentials or addresses are missing
    #[error("Email service not configured: {0}")]
    NotConfigured(String),

    /// Body is not JSON at all
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    /// Body is JSON but fails the submission schema
    #[error("Invalid data: {0}")]
    Validation(FieldErrors),

    /// Provider call failed
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotConfigured(reason) => {
                tracing::error!("Email service not configured: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Email service not configured" }),
                )
            }
            ApiError::MalformedBody(reason) => {
                tracing::debug!("Rejected malformed body: {}", reason);
                (StatusCode::BAD_REQUEST, json!({ "error": "Invalid JSON body" }))
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid data", "details": errors }),
            ),
            ApiError::Delivery(e) => {
                if e.is_partial() {
                    tracing::warn!("Contact form partial delivery: {}", e);
                } else {
                    tracing::error!("Contact form error: {}", e);
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to send message" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for Results with EmailApiError
pub type EmailApiResult<T> = Result<T, EmailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DeliveryError
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;
