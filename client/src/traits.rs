//! Remote collaborator traits for dependency injection
//!
//! All network I/O of the client goes through these traits so the filter
//! engine and the notification store can be tested without a server.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::listing::ListingRecord;
use crate::error::ClientResult;
use shared::{AiMatch, ListingKind};

/// Notification API: list, confirm read, confirm read-all, delete
#[mockall::automock]
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Fetch the authoritative list as raw server objects
    async fn fetch_notifications(&self) -> ClientResult<Vec<Value>>;

    /// Confirm a single read
    async fn mark_read(&self, id: &str) -> ClientResult<()>;

    /// Confirm a bulk read of the given ids
    async fn mark_all_read(&self, ids: &[String]) -> ClientResult<()>;

    /// Delete one notification
    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// Directory API: full listing snapshots and AI match results
#[mockall::automock]
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch every listing of one kind (no pagination)
    async fn fetch_listings(&self, kind: ListingKind) -> ClientResult<Vec<ListingRecord>>;

    /// Fetch scored matches for the current user
    async fn fetch_matches(&self) -> ClientResult<Vec<AiMatch>>;
}
