//! Request plumbing shared by the HTTP services

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use shared::{AppContext, ListBody};

/// Attach the bearer token from the context, if any
pub(crate) fn authorize(request: RequestBuilder, context: &AppContext) -> RequestBuilder {
    match context.auth_token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Send the request and turn non-2xx statuses into `ClientError::Status`
pub(crate) async fn send(request: RequestBuilder, endpoint: &str) -> ClientResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Prefer the envelope's error message when the server sent one
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        endpoint: endpoint.to_string(),
        message,
    })
}

/// Decode a list endpoint that may answer with an envelope or a bare array
pub(crate) async fn read_list<T: DeserializeOwned>(response: Response) -> ClientResult<Vec<T>> {
    let body = response.bytes().await?;
    let list: ListBody<T> = serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
        message: e.to_string(),
    })?;
    list.into_items().map_err(|message| ClientError::Decode { message })
}
