//! User routes

use axum::extract::{Path, State};
use serde_json::{Map, Value, json};

use super::{Created, Envelope, created, ok};
use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::traits::DocumentStore;
use crate::types::{Collection, NewUser};
use crate::web::JsonBody;
use shared::{ComponentId, component_info};

pub async fn list_users<D>(State(state): State<AppState<D>>) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let users = state.store.list(Collection::Users).await?;
    Ok(ok(Value::Array(users)))
}

pub async fn get_user<D>(State(state): State<AppState<D>>, Path(id): Path<String>) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let user = state
        .store
        .get(Collection::Users, &id)
        .await?
        .ok_or_else(|| WebServerError::not_found("User", id))?;
    Ok(ok(user))
}

/// Register a user; fields beyond `name`, `email` and `role` are stored as sent
pub async fn create_user<D>(
    State(state): State<AppState<D>>,
    JsonBody(mut body): JsonBody<Map<String, Value>>,
) -> WebServerResult<Created>
where
    D: DocumentStore + 'static,
{
    let user: NewUser =
        serde_json::from_value(Value::Object(body.clone())).map_err(|e| WebServerError::invalid(e.to_string()))?;

    let name = user.name.trim();
    let email = user.email.trim();
    if name.is_empty() {
        return Err(WebServerError::invalid("'name' is required"));
    }
    if !email.contains('@') {
        return Err(WebServerError::invalid(format!("'{email}' is not an email address")));
    }

    body.insert("name".to_string(), json!(name));
    body.insert("email".to_string(), json!(email));
    body.insert("role".to_string(), serde_json::to_value(user.role)?);

    let stored = state.store.insert(Collection::Users, body).await?;
    component_info!(ComponentId::current(), "👤 Registered user {}", name);
    Ok(created(stored))
}
