//! Meeting routes

use axum::extract::{Path, State};
use serde_json::{Map, Value};

use super::{Created, Envelope, created, ok, required_text};
use crate::core::documents::{index_by_id, involves_user, populate};
use crate::error::WebServerResult;
use crate::state::AppState;
use crate::traits::DocumentStore;
use crate::types::Collection;
use crate::web::JsonBody;

const PARTICIPANTS: &[&str] = &["startup", "investor"];

pub async fn create_meeting<D>(
    State(state): State<AppState<D>>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> WebServerResult<Created>
where
    D: DocumentStore + 'static,
{
    for field in PARTICIPANTS {
        required_text(&body, field)?;
    }

    let stored = state.store.insert(Collection::Meetings, body).await?;
    Ok(created(stored))
}

/// Meetings of one user with both participants populated
pub async fn user_meetings<D>(
    State(state): State<AppState<D>>,
    Path(user_id): Path<String>,
) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    let users = index_by_id(state.store.list(Collection::Users).await?);

    let meetings = state
        .store
        .list(Collection::Meetings)
        .await?
        .into_iter()
        .filter(|meeting| involves_user(meeting, &user_id))
        .map(|mut meeting| {
            populate(&mut meeting, PARTICIPANTS, &users);
            meeting
        })
        .collect();

    Ok(ok(Value::Array(meetings)))
}
