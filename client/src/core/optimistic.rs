//! Optimistic commands over the notification list
//!
//! A command mutates the local list first, then issues the confirming remote
//! call. What happens when the call fails is the command's `Recovery`.

use async_trait::async_trait;

use super::notifications::NotificationList;
use crate::error::ClientResult;
use crate::traits::NotificationApi;

/// Recovery applied when the confirming call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Undo the local mutation with `compensate`
    Revert,
    /// Drop local state and refetch the authoritative list
    Resync,
    /// Keep the local mutation, log the failure
    LogOnly,
}

/// How a command settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing to apply (record absent, or operation already in flight)
    Skipped,
    /// Remote call confirmed the local mutation
    Committed,
    /// Remote call failed and the local mutation was undone
    Reverted,
    /// Remote call failed and the list was refetched
    Resynced,
    /// Remote call failed and the local mutation was kept
    Logged,
    /// Settled after the owner unmounted; no state was touched
    Discarded,
}

#[async_trait]
pub trait OptimisticCommand: Send + Sync {
    /// Label for logs
    fn name(&self) -> &'static str;

    fn recovery(&self) -> Recovery;

    /// Local mutation; false means there was nothing to apply and nothing is issued
    fn apply(&mut self, list: &mut NotificationList) -> bool;

    /// Confirming remote call
    async fn issue(&self, api: &dyn NotificationApi) -> ClientResult<()>;

    /// Undo of `apply`, used with `Recovery::Revert`
    fn compensate(&self, _list: &mut NotificationList) {}
}

/// Set `read` on one record, revert to unread on failure
#[derive(Debug, Clone)]
pub struct MarkRead {
    id: String,
}

impl MarkRead {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl OptimisticCommand for MarkRead {
    fn name(&self) -> &'static str {
        "mark_read"
    }

    fn recovery(&self) -> Recovery {
        Recovery::Revert
    }

    fn apply(&mut self, list: &mut NotificationList) -> bool {
        list.set_read(&self.id, true).is_some()
    }

    async fn issue(&self, api: &dyn NotificationApi) -> ClientResult<()> {
        api.mark_read(&self.id).await
    }

    fn compensate(&self, list: &mut NotificationList) {
        list.set_read(&self.id, false);
    }
}

/// Mark every record read and confirm the ids that were unread at invocation
#[derive(Debug, Clone, Default)]
pub struct MarkAllRead {
    captured: Vec<String>,
}

impl MarkAllRead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids captured by `apply`
    pub fn captured(&self) -> &[String] {
        &self.captured
    }
}

#[async_trait]
impl OptimisticCommand for MarkAllRead {
    fn name(&self) -> &'static str {
        "mark_all_read"
    }

    fn recovery(&self) -> Recovery {
        Recovery::Resync
    }

    fn apply(&mut self, list: &mut NotificationList) -> bool {
        self.captured = list.unread_ids();
        list.mark_all_read();
        true
    }

    async fn issue(&self, api: &dyn NotificationApi) -> ClientResult<()> {
        api.mark_all_read(&self.captured).await
    }
}

/// Remove one record and delete it remotely; a failed delete never restores it
#[derive(Debug, Clone)]
pub struct RemoveNotification {
    id: String,
}

impl RemoveNotification {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl OptimisticCommand for RemoveNotification {
    fn name(&self) -> &'static str {
        "dismiss"
    }

    fn recovery(&self) -> Recovery {
        Recovery::LogOnly
    }

    fn apply(&mut self, list: &mut NotificationList) -> bool {
        list.remove(&self.id).is_some()
    }

    async fn issue(&self, api: &dyn NotificationApi) -> ClientResult<()> {
        api.delete(&self.id).await
    }
}
