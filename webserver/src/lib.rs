//! PitchBridge REST backend
//!
//! Users, startup and investor directories, meetings, messages and
//! notifications over an injected document store. Every response uses the
//! `{success, data}` / `{success: false, error}` envelope.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::{AppState, WebServerState};
pub use types::*;
pub use webserver_impl::{WebServer, router};

// Re-export trait definitions
pub use traits::DocumentStore;

// Re-export service implementations
pub use services::MemoryDocumentStore;
