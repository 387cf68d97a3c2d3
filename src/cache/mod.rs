pub mod memory;

use crate::core::LookupOutcome;

pub use memory::MemoryCache;

/// Trait for lookup-cache implementations.
///
/// Keys are normalized identities. Entries are written once per session
/// and never mutated; only outcomes are stored, never failures.
pub trait HistoryCache: Send + Sync {
    /// Get the cached outcome for a normalized identity key
    fn get(&self, key: &str) -> Option<CachedHistory>;

    /// Store an outcome. A key already present keeps its first value
    /// (single-writer-wins; classification is idempotent, so a lost
    /// race only wastes work)
    fn save(&self, key: &str, outcome: &LookupOutcome);

    /// Increment the hit counter for a key
    fn increment_hit(&self, key: &str);

    /// Get cache statistics
    fn stats(&self) -> CacheStats;
}

/// Cached outcome with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CachedHistory {
    pub key: String,
    pub outcome: LookupOutcome,
    pub hit_count: u32,
}

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub total_entries: u64,
    pub total_hits: u64,
    pub classified_entries: u64,
    pub not_seen_entries: u64,
    pub avg_hit_count: f64,
}
