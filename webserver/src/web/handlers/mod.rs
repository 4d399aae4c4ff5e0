//! Route handlers, one module per resource

pub mod health;
pub mod listings;
pub mod meetings;
pub mod messages;
pub mod notifications;
pub mod users;

use axum::http::{StatusCode, Uri};
use axum::response::Json;
use serde_json::{Map, Value};
use shared::ApiEnvelope;

use crate::error::{WebServerError, WebServerResult};

/// `{success: true, data}`
pub type Envelope = Json<ApiEnvelope<Value>>;

/// 201 with the created document
pub type Created = (StatusCode, Envelope);

pub fn ok(data: Value) -> Envelope {
    Json(ApiEnvelope::ok(data))
}

pub fn created(data: Value) -> Created {
    (StatusCode::CREATED, ok(data))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> WebServerError {
    WebServerError::not_found("Route", uri.path())
}

/// Non-empty string field of a request body
pub(crate) fn required_text<'a>(body: &'a Map<String, Value>, field: &str) -> WebServerResult<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| WebServerError::invalid(format!("'{field}' is required")))
}
