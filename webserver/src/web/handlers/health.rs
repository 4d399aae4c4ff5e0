//! Health check

use axum::extract::State;
use chrono::Utc;
use serde_json::json;

use super::{Envelope, ok};
use crate::state::AppState;
use crate::traits::DocumentStore;

pub async fn health<D>(State(state): State<AppState<D>>) -> Envelope
where
    D: DocumentStore + 'static,
{
    ok(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "uptimeSeconds": state.server.uptime_seconds(),
    }))
}
