//! PitchBridge client library
//!
//! Browser-side logic of the matchmaking application: the directory filter
//! engine behind the Startups and Investors pages, and the notification store
//! that applies read/dismiss actions optimistically and reconciles them with
//! the server.

pub mod config;
pub mod core;
pub mod directory_page;
pub mod error;
pub mod notification_store;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::ClientConfig;
pub use directory_page::DirectoryPage;
pub use error::{ClientError, ClientResult};
pub use notification_store::{NotificationStore, StoreConfig, StoreSnapshot};
pub use types::LoadStatus;

// Re-export trait definitions
pub use traits::{DirectoryApi, NotificationApi};

// Re-export service implementations
pub use services::{RealDirectoryApi, RealNotificationApi};
