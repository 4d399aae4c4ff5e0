//! Response envelope spoken by the REST backend

use serde::{Deserialize, Serialize};

/// `{success, data}` on success, `{success: false, error}` on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiEnvelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// List payload as sent by servers: wrapped in the envelope or as a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped(ApiEnvelope<Vec<T>>),
}

impl<T> ListBody<T> {
    /// Items of the list; a failed or empty envelope yields `Err` with its message
    pub fn into_items(self) -> Result<Vec<T>, String> {
        match self {
            ListBody::Bare(items) => Ok(items),
            ListBody::Wrapped(envelope) if envelope.success => Ok(envelope.data.unwrap_or_default()),
            ListBody::Wrapped(envelope) => Err(envelope
                .error
                .unwrap_or_else(|| "request was not successful".to_string())),
        }
    }
}
