//! Service implementations
//!
//! Real HTTP implementations of the remote collaborator traits

pub mod directory_api;
mod http;
pub mod notification_api;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use directory_api::RealDirectoryApi;
pub use notification_api::RealNotificationApi;
