//! Directory page: loads a listing snapshot and exposes the filtered view

use std::sync::Arc;

use crate::core::listing::ListingRecord;
use crate::core::schema::DirectorySchema;
use crate::core::view::DirectoryView;
use crate::traits::DirectoryApi;
use crate::types::LoadStatus;
use shared::{AiMatch, ComponentId, ListingKind, component_info, component_warn};

/// One Startups or Investors page
pub struct DirectoryPage<D: DirectoryApi> {
    api: Arc<D>,
    view: DirectoryView,
    loading: bool,
    error: Option<String>,
}

impl<D: DirectoryApi> DirectoryPage<D> {
    pub fn new(api: Arc<D>, kind: ListingKind) -> Self {
        Self::with_schema(api, DirectorySchema::for_kind(kind))
    }

    pub fn with_schema(api: Arc<D>, schema: DirectorySchema) -> Self {
        Self {
            api,
            view: DirectoryView::new(schema),
            loading: false,
            error: None,
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.view.schema().kind
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut DirectoryView {
        &mut self.view
    }

    /// Fetch the full listing; on failure keep an error and show nothing
    pub async fn load(&mut self) -> LoadStatus {
        let kind = self.kind();
        self.loading = true;
        self.error = None;

        let result = self.api.fetch_listings(kind).await;
        self.loading = false;

        match result {
            Ok(listings) => {
                let count = listings.len();
                self.view.replace_source(listings);
                component_info!(ComponentId::current(), "📋 Loaded {} {} listings", count, kind);
                LoadStatus::Loaded { count }
            }
            Err(e) => {
                component_warn!(ComponentId::current(), "❌ Failed to load {} listings: {}", kind, e);
                self.view.replace_source(Vec::<ListingRecord>::new());
                self.error = Some(e.to_string());
                LoadStatus::Failed
            }
        }
    }

    /// Records to render: the filtered view, or nothing while an error is shown
    pub fn visible(&mut self) -> Vec<&ListingRecord> {
        if self.error.is_some() {
            return Vec::new();
        }
        self.view.visible()
    }

    /// Remote AI matches; failures are logged and yield an empty list
    pub async fn matches(&self) -> Vec<AiMatch> {
        match self.api.fetch_matches().await {
            Ok(matches) => matches,
            Err(e) => {
                component_warn!(ComponentId::current(), "⚠️ AI match request failed: {}", e);
                Vec::new()
            }
        }
    }
}
