//! In-memory dataset index.
//!
//! Built once at startup from raw records; queried with normalized
//! `name-realm` keys. Aliases resolve to the same record instance.

pub mod normalize;

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{PlayerRecord, RawRecord};

pub use normalize::normalize;

/// Queryable identity index over the dataset
pub struct DatasetIndex {
    by_key: HashMap<String, Arc<PlayerRecord>>,
    records: usize,
    skipped: usize,
}

impl DatasetIndex {
    /// Build the index from raw records.
    ///
    /// Never fails: malformed records (missing identity) are skipped and
    /// counted, and on key collisions the first registration wins.
    pub fn build(records: Vec<RawRecord>) -> Self {
        let mut by_key: HashMap<String, Arc<PlayerRecord>> = HashMap::with_capacity(records.len());
        let mut indexed = 0usize;
        let mut skipped = 0usize;

        for raw in &records {
            if raw.is_malformed() {
                skipped += 1;
                continue;
            }
            let record = Arc::new(PlayerRecord::from_raw(raw));
            let key = normalize(&record.identity);
            if by_key.contains_key(&key) {
                tracing::warn!(identity = %record.identity, "duplicate identity, keeping first");
                skipped += 1;
                continue;
            }
            by_key.insert(key, Arc::clone(&record));
            indexed += 1;

            for alias in &record.aliases {
                let alias_key = normalize(alias);
                if alias_key.is_empty() {
                    continue;
                }
                if by_key.contains_key(&alias_key) {
                    tracing::warn!(alias = %alias, identity = %record.identity,
                        "alias collides with an existing key, keeping first");
                    continue;
                }
                by_key.insert(alias_key, Arc::clone(&record));
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, indexed, "skipped records during index build");
        } else {
            tracing::debug!(indexed, "index built");
        }

        Self {
            by_key,
            records: indexed,
            skipped,
        }
    }

    /// Look up an identity. Case, whitespace and accent insensitive;
    /// alias keys resolve to their primary record.
    pub fn lookup(&self, identity: &str) -> Option<Arc<PlayerRecord>> {
        self.by_key.get(&normalize(identity)).cloned()
    }

    /// Number of primary records indexed (aliases excluded)
    pub fn len(&self) -> usize {
        self.records
    }

    /// True when nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of index keys, aliases included
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    /// Records dropped during the build (malformed or colliding)
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(identity: &str, alts: &[&str], titles: &[&str]) -> RawRecord {
        let mut raw = RawRecord::new(identity);
        raw.alts = alts.iter().map(|a| a.to_string()).collect();
        for title in titles {
            raw.push_title(*title);
        }
        raw
    }

    #[test]
    fn test_build_and_lookup() {
        let index = DatasetIndex::build(vec![raw(
            "Thrall-Ragnaros",
            &[],
            &["Gladiator: Season 3"],
        )]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 0);
        let record = index.lookup("Thrall-Ragnaros").unwrap();
        assert_eq!(record.identity, "Thrall-Ragnaros");
    }

    #[test]
    fn test_lookup_is_normalization_insensitive() {
        let index = DatasetIndex::build(vec![raw("Player-Twilight's Hammer", &[], &[])]);

        let direct = index.lookup("Player-Twilight's Hammer").unwrap();
        let slugged = index.lookup("player-twilights-hammer").unwrap();
        let shouted = index.lookup("  PLAYER-TWILIGHTSHAMMER  ").unwrap();

        assert!(Arc::ptr_eq(&direct, &slugged));
        assert!(Arc::ptr_eq(&direct, &shouted));
    }

    #[test]
    fn test_lookup_of_normalized_key_matches_lookup_of_raw() {
        let index = DatasetIndex::build(vec![raw("Åskara-Área 52", &["Altchar-Área 52"], &[])]);

        for id in ["Åskara-Área 52", "Altchar-Área 52"] {
            let a = index.lookup(id).unwrap();
            let b = index.lookup(&normalize(id)).unwrap();
            assert!(Arc::ptr_eq(&a, &b));
        }
    }

    #[test]
    fn test_alias_resolves_to_same_record() {
        let index = DatasetIndex::build(vec![raw(
            "Main-Realm",
            &["Altchar-Realm"],
            &["Duelist: Season 1"],
        )]);

        let main = index.lookup("Main-Realm").unwrap();
        let alt = index.lookup("Altchar-Realm").unwrap();
        assert!(Arc::ptr_eq(&main, &alt));
        assert_eq!(index.len(), 1);
        assert_eq!(index.key_count(), 2);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let index = DatasetIndex::build(vec![
            raw("", &[], &["Duelist"]),
            raw("   ", &[], &[]),
            raw("Valid-Realm", &[], &[]),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 2);
        assert!(index.lookup("Valid-Realm").is_some());
    }

    #[test]
    fn test_first_identity_wins_on_collision() {
        let index = DatasetIndex::build(vec![
            raw("Thrall-Ragnaros", &[], &["Gladiator: Season 3"]),
            raw("THRALL-Ragnaros", &[], &["Duelist: Season 1"]),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 1);
        let record = index.lookup("thrall-ragnaros").unwrap();
        assert_eq!(record.titles, vec!["Gladiator: Season 3"]);
    }

    #[test]
    fn test_alias_never_shadows_an_identity() {
        let index = DatasetIndex::build(vec![
            raw("First-Realm", &[], &[]),
            raw("Second-Realm", &["First-Realm"], &[]),
        ]);

        let first = index.lookup("First-Realm").unwrap();
        assert_eq!(first.identity, "First-Realm");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_identity_is_none() {
        let index = DatasetIndex::build(Vec::new());
        assert!(index.lookup("Nobody-Nowhere").is_none());
        assert!(index.is_empty());
    }
}
