//! WebServer-specific error types
//!
//! `WebServerError` doubles as the error middleware: every handler returns
//! `WebServerResult`, and the `IntoResponse` impl turns failures into the
//! `{success: false, error}` envelope with the matching status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::{ApiEnvelope, ComponentId, SharedError, component_error, component_warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("{what} not found")]
    NotFound { what: &'static str, id: String },

    #[error("Not authorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl WebServerError {
    pub fn not_found(what: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { what, id: id.into() }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized { reason: reason.into() }
    }

    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            component_error!(ComponentId::current(), "❌ {}", self);
        } else {
            component_warn!(ComponentId::current(), "⚠️ {} ({})", self, status);
        }

        (status, Json(ApiEnvelope::failure(self.to_string()))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
