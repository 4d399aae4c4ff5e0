//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod memory_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use memory_store::MemoryDocumentStore;
