//! Directory and AI match routes
//!
//! Full snapshots, no pagination: the client filters locally.

use axum::extract::State;
use serde_json::Value;

use super::{Envelope, ok};
use crate::error::WebServerResult;
use crate::state::AppState;
use crate::traits::DocumentStore;
use crate::types::Collection;

async fn list_collection<D>(state: &AppState<D>, collection: Collection) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    Ok(ok(Value::Array(state.store.list(collection).await?)))
}

pub async fn list_startups<D>(State(state): State<AppState<D>>) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    list_collection(&state, Collection::Startups).await
}

pub async fn list_investors<D>(State(state): State<AppState<D>>) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    list_collection(&state, Collection::Investors).await
}

pub async fn list_matches<D>(State(state): State<AppState<D>>) -> WebServerResult<Envelope>
where
    D: DocumentStore + 'static,
{
    list_collection(&state, Collection::Matches).await
}
