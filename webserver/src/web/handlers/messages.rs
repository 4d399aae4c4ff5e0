//! Message routes

use axum::extract::{Path, State};
use serde_json::{Map, Value};

use super::{Created, Envelope, created, ok, required_text};
use crate::core::documents::{in_conversation, index_by_id, populate, sort_by_created};
use crate::error::WebServerResult;
use crate::state::AppState;
use crate::traits::DocumentStore;
use crate::types::Collection;
use crate::web::{JsonBody, SessionUser};

/// Store a message; the sender is always the session user
pub async fn send_message<D>(
    State(state): State<AppState<D>>,
    SessionUser(sender): SessionUser,
    JsonBody(mut body): JsonBody<Map<String, Value>>,
) -> WebServerResult<Created>
where
    D: DocumentStore + 'static,
{
    required_text(&body, "receiver")?;
    required_text(&body, "content")?;

    body.insert("sender".to_string(), Value::String(sender));
    let stored = state.store.insert(Collection::Messages, body).await?;
    Ok(created(stored))
}

/// Conversation between the session user and `:userId`, oldest first
pub async fn conversation<D>(
    State(state): State<AppState<D>>,
    SessionUser(me): SessionUser,
    Path(other): Path<String>,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let users = index_by_id(state.store.list(Collection::Users).await?);

    let mut messages: Vec<Value> = state
        .store
        .list(Collection::Messages)
        .await?
        .into_iter()
        .filter(|message| in_conversation(message, &me, &other))
        .collect();
    sort_by_created(&mut messages);

    for message in &mut messages {
        populate(message, &["sender", "receiver"], &users);
    }

    Ok(ok(Value::Array(messages)))
}
