//! Core client logic
//!
//! Pure logic with no I/O dependencies: the directory filter engine and the
//! notification list with its optimistic commands.

pub mod filter;
pub mod filter_state;
pub mod listing;
pub mod notifications;
pub mod optimistic;
pub mod schema;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use filter::{filter_indices, filter_listings};
pub use filter_state::FilterState;
pub use listing::{FieldValue, ListingRecord};
pub use notifications::{NotificationList, NotificationRecord, Phase};
pub use optimistic::{CommandOutcome, MarkAllRead, MarkRead, OptimisticCommand, Recovery, RemoveNotification};
pub use schema::{Bucket, Dimension, DirectorySchema, MatchRule, NumericDimension};
pub use view::DirectoryView;
