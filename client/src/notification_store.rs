//! Notification reconciliation store
//!
//! Keeps the visible notification list under optimistic mutation. Every
//! operation mutates the local list before its remote call is issued, and
//! every failure degrades to the command's recovery: nothing is returned to
//! the caller as an error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::core::notifications::{NotificationList, NotificationRecord};
use crate::core::optimistic::{
    CommandOutcome, MarkAllRead, MarkRead, OptimisticCommand, Recovery, RemoveNotification,
};
use crate::traits::NotificationApi;
use crate::types::LoadStatus;
use shared::{ComponentId, component_debug, component_info, component_warn};

/// Delay between entering `Dismissing` and dropping the record
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub dismiss_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dismiss_delay: DEFAULT_DISMISS_DELAY,
        }
    }
}

#[derive(Debug, Default)]
struct StoreState {
    notifications: NotificationList,
    loading: bool,
    error: Option<String>,
}

/// Point-in-time copy of the store for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub notifications: Vec<NotificationRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub unread_count: usize,
}

impl StoreSnapshot {
    pub fn get(&self, unique_id: &str) -> Option<&NotificationRecord> {
        self.notifications.iter().find(|n| n.unique_id == unique_id)
    }
}

/// Clears the in-flight flag when the bulk operation settles or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Optimistic notification list backed by a remote notification API
pub struct NotificationStore<A: NotificationApi> {
    api: Arc<A>,
    state: Arc<RwLock<StoreState>>,
    mounted: Arc<AtomicBool>,
    marking_all: Arc<AtomicBool>,
    config: StoreConfig,
}

impl<A: NotificationApi> Clone for NotificationStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            mounted: self.mounted.clone(),
            marking_all: self.marking_all.clone(),
            config: self.config,
        }
    }
}

impl<A: NotificationApi + 'static> NotificationStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_config(api, StoreConfig::default())
    }

    pub fn with_config(api: A, config: StoreConfig) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(StoreState::default())),
            mounted: Arc::new(AtomicBool::new(true)),
            marking_all: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Stop applying results of calls that settle from now on
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// True while a mark-all-read is outstanding; the UI disables its control
    pub fn is_marking_all(&self) -> bool {
        self.marking_all.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            notifications: state.notifications.records().to_vec(),
            loading: state.loading,
            error: state.error.clone(),
            unread_count: state.notifications.unread_count(),
        }
    }

    /// Fetch the authoritative list, replacing all local state
    pub async fn load(&self) -> LoadStatus {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.api.fetch_notifications().await;

        if !self.is_mounted() {
            return LoadStatus::Discarded;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(raw) => {
                state.notifications = NotificationList::ingest(raw);
                let count = state.notifications.len();
                component_info!(ComponentId::current(), "📋 Loaded {} notifications", count);
                LoadStatus::Loaded { count }
            }
            Err(e) => {
                component_warn!(ComponentId::current(), "❌ Failed to load notifications: {}", e);
                state.notifications = NotificationList::default();
                state.error = Some(e.to_string());
                LoadStatus::Failed
            }
        }
    }

    /// Optimistically mark one notification read; reverted if the confirm fails
    pub async fn mark_read(&self, id: &str) -> CommandOutcome {
        self.execute(MarkRead::new(id)).await
    }

    /// Optimistically mark everything read; a failed confirm triggers a full refetch
    pub async fn mark_all_read(&self) -> CommandOutcome {
        if self.marking_all.swap(true, Ordering::SeqCst) {
            component_debug!(ComponentId::current(), "mark_all_read already in flight, ignoring");
            return CommandOutcome::Skipped;
        }
        let _in_flight = InFlight(&self.marking_all);

        self.execute(MarkAllRead::new()).await
    }

    /// Enter `Dismissing` now, remove after the dismiss delay, then delete remotely
    pub async fn dismiss(&self, id: &str) -> CommandOutcome {
        if !self.begin_dismiss(id).await {
            return CommandOutcome::Skipped;
        }

        tokio::time::sleep(self.config.dismiss_delay).await;

        if !self.is_mounted() {
            // The view is gone but the user still asked for the delete
            if let Err(e) = self.api.delete(id).await {
                component_warn!(ComponentId::current(), "⚠️ Delete of {} failed after unmount: {}", id, e);
            }
            return CommandOutcome::Discarded;
        }

        self.execute(RemoveNotification::new(id)).await
    }

    /// Synchronous first half of `dismiss`; false if absent or already dismissing
    pub async fn begin_dismiss(&self, id: &str) -> bool {
        self.state.write().await.notifications.begin_dismiss(id)
    }

    /// apply → issue → commit, or recover according to the command
    pub async fn execute<C: OptimisticCommand>(&self, mut command: C) -> CommandOutcome {
        {
            let mut state = self.state.write().await;
            if !command.apply(&mut state.notifications) {
                component_debug!(ComponentId::current(), "{} skipped: nothing to apply", command.name());
                return CommandOutcome::Skipped;
            }
        }

        let error = match command.issue(self.api.as_ref()).await {
            Ok(()) => {
                component_debug!(ComponentId::current(), "✅ {} confirmed", command.name());
                return CommandOutcome::Committed;
            }
            Err(e) => e,
        };

        if !self.is_mounted() {
            component_warn!(ComponentId::current(), "{} failed after unmount: {}", command.name(), error);
            return CommandOutcome::Discarded;
        }

        match command.recovery() {
            Recovery::Revert => {
                component_warn!(ComponentId::current(), "⚠️ {} failed, reverting: {}", command.name(), error);
                command.compensate(&mut self.state.write().await.notifications);
                CommandOutcome::Reverted
            }
            Recovery::Resync => {
                component_warn!(ComponentId::current(), "⚠️ {} failed, refetching: {}", command.name(), error);
                self.load().await;
                CommandOutcome::Resynced
            }
            Recovery::LogOnly => {
                component_warn!(ComponentId::current(), "⚠️ {} failed: {}", command.name(), error);
                CommandOutcome::Logged
            }
        }
    }
}
