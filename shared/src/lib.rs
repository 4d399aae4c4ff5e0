//! Shared types for the PitchBridge matchmaking application
//!
//! Contains only the types both the browser-side client and the REST backend
//! need to agree on. Component-internal types are kept in their components.

pub mod context;
pub mod envelope;
pub mod errors;
pub mod logging;
pub mod types;

pub use context::{AppContext, Theme};
pub use envelope::{ApiEnvelope, ListBody};
pub use errors::*;
pub use types::*;
