//! Core types used by both the client and the backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global component ID singleton - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Fallback used when a library is driven without a binary entry point (tests, embedding)
static EMBEDDED: ComponentId = ComponentId::Embedded;

/// Identifier of the running component, stamped on every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Command line / browser-side client
    Client,
    /// REST backend
    WebServer,
    /// Library used without an initialized entry point
    Embedded,
}

impl ComponentId {
    /// Initialize the global component ID for the client
    pub fn init_client() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Client)
    }

    /// Initialize the global component ID for the webserver
    pub fn init_webserver() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::WebServer)
    }

    /// Get the global component ID, `Embedded` when no entry point initialized it
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get().unwrap_or(&EMBEDDED)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Client => write!(f, "client"),
            ComponentId::WebServer => write!(f, "webserver"),
            ComponentId::Embedded => write!(f, "embedded"),
        }
    }
}

/// Which directory a listing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Startup,
    Investor,
}

impl ListingKind {
    /// Collection path segment used by the REST API
    pub fn collection(&self) -> &'static str {
        match self {
            ListingKind::Startup => "startups",
            ListingKind::Investor => "investors",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Startup => write!(f, "startup"),
            ListingKind::Investor => write!(f, "investor"),
        }
    }
}

impl std::str::FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "startup" | "startups" => Ok(ListingKind::Startup),
            "investor" | "investors" => Ok(ListingKind::Investor),
            _ => Err(format!("Unknown listing kind: {s}")),
        }
    }
}

/// Notification categories; anything unrecognized is `Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Success,
    Warning,
    Error,
    Message,
    NewUser,
    FeatureUpdate,
    #[default]
    #[serde(other)]
    Info,
}

impl NotificationType {
    /// Lenient parse used at ingestion; never fails
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("success") => NotificationType::Success,
            Some("warning") => NotificationType::Warning,
            Some("error") => NotificationType::Error,
            Some("message") => NotificationType::Message,
            Some("new_user") => NotificationType::NewUser,
            Some("feature_update") => NotificationType::FeatureUpdate,
            _ => NotificationType::Info,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
            NotificationType::Message => "message",
            NotificationType::NewUser => "new_user",
            NotificationType::FeatureUpdate => "feature_update",
            NotificationType::Info => "info",
        };
        f.write_str(label)
    }
}

/// Account role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Startup,
    Investor,
}

/// Scored record returned by the AI match endpoint; ranking is opaque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMatch {
    pub id: String,
    pub match_score: f64,
    #[serde(default)]
    pub match_reasons: Vec<String>,
}
