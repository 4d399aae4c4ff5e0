//! Backend document types and seed data

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::UserRole;

/// Document collections of the in-memory store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Startups,
    Investors,
    Meetings,
    Messages,
    Notifications,
    Matches,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Users,
        Collection::Startups,
        Collection::Investors,
        Collection::Meetings,
        Collection::Messages,
        Collection::Notifications,
        Collection::Matches,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Startups => "startups",
            Collection::Investors => "investors",
            Collection::Meetings => "meetings",
            Collection::Messages => "messages",
            Collection::Notifications => "notifications",
            Collection::Matches => "matches",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Required fields of a `POST /api/users` body
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Body of `PUT /api/notifications/read-all`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadAllRequest {
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Initial store content loaded with `--seed`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub startups: Vec<Value>,
    pub investors: Vec<Value>,
    pub meetings: Vec<Value>,
    pub messages: Vec<Value>,
    pub notifications: Vec<Value>,
    pub matches: Vec<Value>,
    /// Bearer token → user id
    pub sessions: HashMap<String, String>,
}
