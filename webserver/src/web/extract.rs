//! Request extractors
//!
//! Both reject with `WebServerError`, so malformed bodies and missing
//! sessions still answer with the failure envelope.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::WebServerError;
use crate::state::AppState;
use crate::traits::DocumentStore;

/// JSON body whose rejection is a 400 envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebServerError))]
pub struct JsonBody<T>(pub T);

/// User id resolved from the `Authorization: Bearer <token>` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser(pub String);

#[axum::async_trait]
impl<D> FromRequestParts<AppState<D>> for SessionUser
where
    D: DocumentStore + 'static,
{
    type Rejection = WebServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState<D>) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| WebServerError::unauthorized("missing bearer token"))?;

        match state.store.session_user(token).await? {
            Some(user_id) => Ok(SessionUser(user_id)),
            None => Err(WebServerError::unauthorized("unknown session")),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
