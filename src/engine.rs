use std::time::Instant;

use crate::cache::{CacheStats, HistoryCache, MemoryCache};
use crate::classify::Classifier;
use crate::core::{LookupOutcome, LookupResponse, RawRecord};
use crate::error::Result;
use crate::index::{normalize, DatasetIndex};
use crate::ladder::Ladder;
use crate::source::RecordSource;

/// Main rank lookup engine: dataset index + classifier + lookup cache.
///
/// Constructed once at startup and passed by reference to consumers;
/// `lookup` is infallible and at most one classification runs per
/// identity per engine lifetime.
pub struct RankEngine {
    index: DatasetIndex,
    classifier: Classifier,
    cache: Box<dyn HistoryCache>,
}

impl RankEngine {
    /// Create an engine with the default in-memory cache
    pub fn new(records: Vec<RawRecord>, ladder: Ladder) -> Result<Self> {
        Self::with_cache(records, ladder, Box::new(MemoryCache::new()))
    }

    /// Create an engine with a custom cache implementation
    pub fn with_cache(
        records: Vec<RawRecord>,
        ladder: Ladder,
        cache: Box<dyn HistoryCache>,
    ) -> Result<Self> {
        let classifier = Classifier::new(ladder)?;
        let index = DatasetIndex::build(records);
        tracing::debug!(
            records = index.len(),
            skipped = index.skipped(),
            tiers = classifier.ladder().len(),
            "engine ready"
        );
        Ok(Self {
            index,
            classifier,
            cache,
        })
    }

    /// Create an engine by loading records from a source
    pub fn from_source(source: &dyn RecordSource, ladder: Ladder) -> Result<Self> {
        let records = source.load()?;
        tracing::debug!(source = source.name(), rows = records.len(), "records loaded");
        Self::new(records, ladder)
    }

    /// Look up one identity.
    ///
    /// Total over any input string: unknown identities produce
    /// `NotSeen`, known ones a classification (possibly empty history).
    pub fn lookup(&self, identity: &str) -> LookupResponse {
        let start = Instant::now();
        let key = normalize(identity);
        let record = self.index.lookup(&key);
        let canonical_identity = record.as_ref().map(|r| r.identity.clone());

        if let Some(cached) = self.cache.get(&key) {
            self.cache.increment_hit(&key);
            return LookupResponse {
                identity: key,
                canonical_identity,
                outcome: cached.outcome,
                from_cache: true,
                latency_ms: start.elapsed().as_secs_f64() * 1000.0,
            };
        }

        let outcome = match &record {
            Some(record) => LookupOutcome::Classified(self.classifier.classify(record)),
            None => LookupOutcome::NotSeen,
        };
        self.cache.save(&key, &outcome);

        let response = LookupResponse {
            identity: key,
            canonical_identity,
            outcome,
            from_cache: false,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        tracing::debug!("{}", response.display());
        response
    }

    /// The ladder the engine classifies against
    pub fn ladder(&self) -> &Ladder {
        self.classifier.ladder()
    }

    /// Number of indexed records
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Records dropped during the index build
    pub fn skipped_records(&self) -> usize {
        self.index.skipped()
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
