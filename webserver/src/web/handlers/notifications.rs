//! Notification routes, scoped to the session user
//!
//! A notification owned by another user answers 404, the same as an
//! unknown id.

use axum::extract::{Path, State};
use serde_json::{Map, Value, json};

use super::{Envelope, ok};
use crate::core::documents::{document_id, reference_id};
use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::traits::DocumentStore;
use crate::types::{Collection, ReadAllRequest};
use crate::web::{JsonBody, SessionUser};
use shared::{ComponentId, component_debug};

const OWNER_FIELD: &str = "user";

fn owned_by(notification: &Value, user_id: &str) -> bool {
    reference_id(notification, OWNER_FIELD) == Some(user_id)
}

fn read_patch() -> Map<String, Value> {
    Map::from_iter([("read".to_string(), Value::Bool(true))])
}

async fn owned_notification<D>(state: &AppState<D>, user_id: &str, id: &str) -> WebServerResult<Value>
where
    D: DocumentStore + 'static,
{
    state
        .store
        .get(Collection::Notifications, id)
        .await?
        .filter(|notification| owned_by(notification, user_id))
        .ok_or_else(|| WebServerError::not_found("Notification", id))
}

pub async fn list_notifications<D>(
    State(state): State<AppState<D>>,
    SessionUser(user_id): SessionUser,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let notifications = state
        .store
        .list(Collection::Notifications)
        .await?
        .into_iter()
        .filter(|notification| owned_by(notification, &user_id))
        .collect();
    Ok(ok(Value::Array(notifications)))
}

pub async fn mark_read<D>(
    State(state): State<AppState<D>>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    owned_notification(&state, &user_id, &id).await?;

    let updated = state
        .store
        .update(Collection::Notifications, &id, read_patch())
        .await?
        .ok_or_else(|| WebServerError::not_found("Notification", &id))?;
    Ok(ok(updated))
}

/// Mark the listed notifications read; ids of other users are ignored
pub async fn mark_all_read<D>(
    State(state): State<AppState<D>>,
    SessionUser(user_id): SessionUser,
    JsonBody(request): JsonBody<ReadAllRequest>,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let owned: Vec<String> = state
        .store
        .list(Collection::Notifications)
        .await?
        .iter()
        .filter(|notification| owned_by(notification, &user_id))
        .filter_map(document_id)
        .filter(|id| request.ids.iter().any(|wanted| wanted.as_str() == *id))
        .map(String::from)
        .collect();

    let modified = state
        .store
        .update_many(Collection::Notifications, &owned, read_patch())
        .await?;
    component_debug!(ComponentId::current(), "read-all for {}: {} modified", user_id, modified);
    Ok(ok(json!({ "modified": modified })))
}

pub async fn delete_notification<D>(
    State(state): State<AppState<D>>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    owned_notification(&state, &user_id, &id).await?;

    if !state.store.remove(Collection::Notifications, &id).await? {
        return Err(WebServerError::not_found("Notification", id));
    }
    Ok(ok(json!({ "deleted": id })))
}
