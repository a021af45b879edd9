//! Request handlers for the contact endpoints.
//!
//! Each submission runs the same steps in order: configuration check, JSON
//! parse, validation, then delivery. Nothing is sent unless every earlier step
//! passed.

use super::{AppState, Mailer};
use crate::error::ApiError;
use crate::models::{ContactSubmission, Inquiry};
use crate::validation::{validate_contact, validate_quote, FieldErrors};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    relay(&state, &body, validate_contact).await
}

/// `POST /api/quote`
pub async fn submit_quote(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    relay(&state, &body, validate_quote).await
}

/// `GET /api/contact/schema`
pub async fn contact_schema() -> Json<Value> {
    let schema = schemars::schema_for!(ContactSubmission);
    Json(serde_json::to_value(schema).unwrap_or_else(|_| json!({})))
}

async fn relay<T, V>(state: &AppState, body: &[u8], validate: V) -> Result<Json<Value>, ApiError>
where
    T: Inquiry,
    V: Fn(&Value) -> Result<T, FieldErrors>,
{
    state.metrics.record_received();

    let service = match &state.mailer {
        Mailer::Ready(service) => service.clone(),
        Mailer::Unconfigured(reason) => {
            state.metrics.record_unconfigured();
            return Err(ApiError::NotConfigured(reason.clone()));
        }
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        state.metrics.record_invalid();
        ApiError::MalformedBody(e.to_string())
    })?;

    let inquiry = validate(&value).map_err(|errors| {
        state.metrics.record_invalid();
        tracing::debug!("Submission rejected: {}", errors);
        ApiError::Validation(errors)
    })?;

    match service.deliver(&inquiry).await {
        Ok(_) => {
            state.metrics.record_delivered();
            Ok(Json(json!({ "success": true })))
        }
        Err(e) => {
            state.metrics.record_delivery_failed(e.is_partial());
            Err(ApiError::Delivery(e))
        }
    }
}
