//! Client-specific data types

/// Result of loading a remote snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Failed,
    /// Settled after the owner unmounted; state untouched
    Discarded,
}
