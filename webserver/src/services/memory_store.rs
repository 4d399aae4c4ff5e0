//! In-memory document store

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::documents::{CREATED_AT_FIELD, ID_FIELD, apply_patch, document_id, format_created_at, stamp};
use crate::error::WebServerResult;
use crate::traits::DocumentStore;
use crate::types::{Collection, SeedData};
use shared::{ComponentId, component_info};

#[derive(Debug, Default)]
struct StoreData {
    collections: HashMap<Collection, Vec<Value>>,
    sessions: HashMap<String, String>,
}

/// Document store kept in process memory, shared by every handler
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    data: Arc<RwLock<StoreData>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data; documents without `_id` or `createdAt` get one
    pub fn from_seed(seed: SeedData) -> WebServerResult<Self> {
        let mut collections = HashMap::new();

        let users = seed
            .users
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        for (collection, documents) in [
            (Collection::Users, users),
            (Collection::Startups, seed.startups),
            (Collection::Investors, seed.investors),
            (Collection::Meetings, seed.meetings),
            (Collection::Messages, seed.messages),
            (Collection::Notifications, seed.notifications),
            (Collection::Matches, seed.matches),
        ] {
            let documents: Vec<Value> = documents.into_iter().filter_map(seed_document).collect();
            collections.insert(collection, documents);
        }

        Ok(Self {
            data: Arc::new(RwLock::new(StoreData {
                collections,
                sessions: seed.sessions,
            })),
        })
    }

    /// Read a JSON seed file
    pub async fn load_seed_file(path: &Path) -> WebServerResult<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let seed: SeedData = serde_json::from_str(&text)?;
        let store = Self::from_seed(seed)?;

        for collection in Collection::ALL {
            let count = store.count(collection).await;
            component_info!(ComponentId::current(), "🌱 Seeded {} {}", count, collection);
        }
        Ok(store)
    }

    /// Register a bearer token for a user
    pub async fn add_session(&self, token: impl Into<String>, user_id: impl Into<String>) {
        self.data.write().await.sessions.insert(token.into(), user_id.into());
    }

    pub async fn count(&self, collection: Collection) -> usize {
        self.data
            .read()
            .await
            .collections
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

/// Objects only; fill in missing server fields
fn seed_document(document: Value) -> Option<Value> {
    let Value::Object(mut object) = document else {
        return None;
    };

    let id = object
        .get(ID_FIELD)
        .or_else(|| object.get("id"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    object.insert(ID_FIELD.to_string(), Value::String(id));
    object
        .entry(CREATED_AT_FIELD)
        .or_insert_with(|| Value::String(format_created_at(Utc::now())));

    Some(Value::Object(object))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: Collection) -> WebServerResult<Vec<Value>> {
        let data = self.data.read().await;
        Ok(data.collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: &str) -> WebServerResult<Option<Value>> {
        let data = self.data.read().await;
        Ok(data
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| document_id(doc) == Some(id)))
            .cloned())
    }

    async fn insert(&self, collection: Collection, document: Map<String, Value>) -> WebServerResult<Value> {
        let document = stamp(document, Uuid::new_v4().to_string(), Utc::now());
        self.data
            .write()
            .await
            .collections
            .entry(collection)
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Map<String, Value>,
    ) -> WebServerResult<Option<Value>> {
        let mut data = self.data.write().await;
        let Some(document) = data
            .collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| document_id(doc) == Some(id)))
        else {
            return Ok(None);
        };

        apply_patch(document, &patch);
        Ok(Some(document.clone()))
    }

    async fn update_many(
        &self,
        collection: Collection,
        ids: &[String],
        patch: Map<String, Value>,
    ) -> WebServerResult<usize> {
        let mut data = self.data.write().await;
        let Some(documents) = data.collections.get_mut(&collection) else {
            return Ok(0);
        };

        let modified = documents
            .iter_mut()
            .filter(|doc| document_id(doc).is_some_and(|id| ids.iter().any(|wanted| wanted == id)))
            .map(|doc| apply_patch(doc, &patch))
            .filter(|changed| *changed)
            .count();
        Ok(modified)
    }

    async fn remove(&self, collection: Collection, id: &str) -> WebServerResult<bool> {
        let mut data = self.data.write().await;
        let Some(documents) = data.collections.get_mut(&collection) else {
            return Ok(false);
        };

        let before = documents.len();
        documents.retain(|doc| document_id(doc) != Some(id));
        Ok(documents.len() != before)
    }

    async fn session_user(&self, token: &str) -> WebServerResult<Option<String>> {
        Ok(self.data.read().await.sessions.get(token).cloned())
    }
}
