//! Unit tests for the core client logic

pub mod fixtures;
pub mod filter;
pub mod notifications;
