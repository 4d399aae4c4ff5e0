//! HTTP layer: extractors and route handlers

pub mod extract;
pub mod handlers;

pub use extract::{JsonBody, SessionUser};
