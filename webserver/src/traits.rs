//! Service trait definitions for dependency injection
//!
//! Handlers reach storage only through `DocumentStore`, so the router can be
//! exercised against the generated mock.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::WebServerResult;
use crate::types::Collection;

/// Document storage and session lookup
#[mockall::automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection in insertion order
    async fn list(&self, collection: Collection) -> WebServerResult<Vec<Value>>;

    /// One document by `_id`
    async fn get(&self, collection: Collection, id: &str) -> WebServerResult<Option<Value>>;

    /// Store a document, assigning `_id` and `createdAt`; returns the stored document
    async fn insert(&self, collection: Collection, document: Map<String, Value>) -> WebServerResult<Value>;

    /// Merge `patch` into one document; `None` if absent
    async fn update(&self, collection: Collection, id: &str, patch: Map<String, Value>)
    -> WebServerResult<Option<Value>>;

    /// Merge `patch` into every listed document; returns how many actually changed
    async fn update_many(&self, collection: Collection, ids: &[String], patch: Map<String, Value>)
    -> WebServerResult<usize>;

    /// Delete one document; false if absent
    async fn remove(&self, collection: Collection, id: &str) -> WebServerResult<bool>;

    /// User id behind a bearer token
    async fn session_user(&self, token: &str) -> WebServerResult<Option<String>>;
}
