use std::collections::HashMap;
use std::sync::Mutex;

use crate::cache::{CachedHistory, CacheStats, HistoryCache};
use crate::core::LookupOutcome;

struct Entry {
    outcome: LookupOutcome,
    hit_count: u32,
}

/// In-memory lookup cache.
///
/// Session-lifetime: entries live until the process ends. The interior
/// mutex gives per-key mutual exclusion when a multi-threaded host
/// shares the engine.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryCache for MemoryCache {
    fn get(&self, key: &str) -> Option<CachedHistory> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|entry| CachedHistory {
            key: key.to_string(),
            outcome: entry.outcome.clone(),
            hit_count: entry.hit_count,
        })
    }

    fn save(&self, key: &str, outcome: &LookupOutcome) {
        let mut entries = self.entries.lock().unwrap();
        entries.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!(key, "caching outcome");
            Entry {
                outcome: outcome.clone(),
                hit_count: 0,
            }
        });
    }

    fn increment_hit(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(key) {
            entry.hit_count += 1;
        }
    }

    fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().unwrap();
        let total_entries = entries.len() as u64;
        let total_hits: u64 = entries.values().map(|e| e.hit_count as u64).sum();
        let not_seen_entries = entries
            .values()
            .filter(|e| e.outcome.is_not_seen())
            .count() as u64;
        CacheStats {
            total_entries,
            total_hits,
            classified_entries: total_entries - not_seen_entries,
            not_seen_entries,
            avg_hit_count: if total_entries > 0 {
                total_hits as f64 / total_entries as f64
            } else {
                0.0
            },
        }
    }
}
