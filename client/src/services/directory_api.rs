//! HTTP implementation of the directory API

use async_trait::async_trait;

use super::http::{authorize, read_list, send};
use crate::core::listing::ListingRecord;
use crate::error::ClientResult;
use crate::traits::DirectoryApi;
use shared::{AiMatch, AppContext, ComponentId, ListingKind, component_debug};

/// Directory API over REST
#[derive(Debug, Clone)]
pub struct RealDirectoryApi {
    client: reqwest::Client,
    context: AppContext,
}

impl RealDirectoryApi {
    pub fn new(context: AppContext) -> Self {
        Self::with_client(reqwest::Client::new(), context)
    }

    pub fn with_client(client: reqwest::Client, context: AppContext) -> Self {
        Self { client, context }
    }
}

#[async_trait]
impl DirectoryApi for RealDirectoryApi {
    async fn fetch_listings(&self, kind: ListingKind) -> ClientResult<Vec<ListingRecord>> {
        let url = self.context.route(&["api", kind.collection()])?;
        component_debug!(ComponentId::current(), "📥 GET {}", url);

        let request = authorize(self.client.get(url.clone()), &self.context);
        let response = send(request, url.as_str()).await?;
        read_list(response).await
    }

    async fn fetch_matches(&self) -> ClientResult<Vec<AiMatch>> {
        let url = self.context.route(&["api", "matches"])?;
        component_debug!(ComponentId::current(), "📥 GET {}", url);

        let request = authorize(self.client.get(url.clone()), &self.context);
        let response = send(request, url.as_str()).await?;
        read_list(response).await
    }
}
