//! HTTP implementation of the notification API

use async_trait::async_trait;
use serde_json::{Value, json};

use super::http::{authorize, read_list, send};
use crate::error::ClientResult;
use crate::traits::NotificationApi;
use shared::{AppContext, ComponentId, component_debug};

/// Notification API over REST, authenticated with the context's bearer token
#[derive(Debug, Clone)]
pub struct RealNotificationApi {
    client: reqwest::Client,
    context: AppContext,
}

impl RealNotificationApi {
    pub fn new(context: AppContext) -> Self {
        Self::with_client(reqwest::Client::new(), context)
    }

    pub fn with_client(client: reqwest::Client, context: AppContext) -> Self {
        Self { client, context }
    }
}

#[async_trait]
impl NotificationApi for RealNotificationApi {
    async fn fetch_notifications(&self) -> ClientResult<Vec<Value>> {
        let url = self.context.route(&["api", "notifications"])?;
        component_debug!(ComponentId::current(), "📥 GET {}", url);

        let request = authorize(self.client.get(url.clone()), &self.context);
        let response = send(request, url.as_str()).await?;
        read_list(response).await
    }

    async fn mark_read(&self, id: &str) -> ClientResult<()> {
        let url = self.context.route(&["api", "notifications", id, "read"])?;
        component_debug!(ComponentId::current(), "📤 PUT {}", url);

        let request = authorize(self.client.put(url.clone()), &self.context);
        send(request, url.as_str()).await?;
        Ok(())
    }

    async fn mark_all_read(&self, ids: &[String]) -> ClientResult<()> {
        let url = self.context.route(&["api", "notifications", "read-all"])?;
        component_debug!(ComponentId::current(), "📤 PUT {} ({} ids)", url, ids.len());

        let request = authorize(self.client.put(url.clone()), &self.context).json(&json!({ "ids": ids }));
        send(request, url.as_str()).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let url = self.context.route(&["api", "notifications", id])?;
        component_debug!(ComponentId::current(), "🗑️ DELETE {}", url);

        let request = authorize(self.client.delete(url.clone()), &self.context);
        send(request, url.as_str()).await?;
        Ok(())
    }
}
