//! Title-history classification against a rank ladder.

use std::collections::BTreeMap;

use memchr::memmem;

use crate::core::{ClassificationResult, HighestRank, PlayerRecord};
use crate::error::Result;
use crate::ladder::{Ladder, MatchStrictness, TierMatcher};

/// One lowered pattern with a reusable substring searcher
struct CompiledPattern {
    /// The canonical text as configured, original casing
    canonical: String,
    lowered: String,
    finder: memmem::Finder<'static>,
}

impl CompiledPattern {
    fn new(canonical: &str) -> Self {
        let lowered = canonical.to_lowercase();
        Self {
            canonical: canonical.to_string(),
            finder: memmem::Finder::new(lowered.as_bytes()).into_owned(),
            lowered,
        }
    }

    fn contains(&self, title_lowered: &str) -> bool {
        self.finder.find(title_lowered.as_bytes()).is_some()
    }

    fn matches(&self, title_lowered: &str, strictness: MatchStrictness) -> bool {
        match strictness {
            MatchStrictness::Exact => title_lowered == self.lowered,
            MatchStrictness::Contains => self.contains(title_lowered),
        }
    }
}

enum CompiledMatcher {
    /// Unanchored substring containment of one pattern
    Prefix(CompiledPattern),

    /// Closed set of canonical titles; regional pairs compile to a
    /// two-entry set, the distinction is configuration-only
    Set {
        patterns: Vec<CompiledPattern>,
        strictness: MatchStrictness,
    },
}

struct CompiledTier {
    key: String,
    label: String,
    matcher: CompiledMatcher,
}

/// Classifier over a fixed ladder.
///
/// Pure and total: `classify` never fails, an empty or unmatched title
/// bag is the "empty history" result, not an error.
pub struct Classifier {
    ladder: Ladder,
    tiers: Vec<CompiledTier>,
}

impl Classifier {
    /// Validate the ladder and precompile its patterns
    pub fn new(ladder: Ladder) -> Result<Self> {
        ladder.validate()?;
        let tiers = ladder
            .tiers()
            .iter()
            .map(|tier| {
                let matcher = match &tier.matcher {
                    TierMatcher::Prefix { prefix } => {
                        CompiledMatcher::Prefix(CompiledPattern::new(prefix))
                    }
                    TierMatcher::TitleSet { titles, strictness } => CompiledMatcher::Set {
                        patterns: titles.iter().map(|t| CompiledPattern::new(t)).collect(),
                        strictness: *strictness,
                    },
                    TierMatcher::RegionalPair {
                        first,
                        second,
                        strictness,
                    } => CompiledMatcher::Set {
                        patterns: vec![CompiledPattern::new(first), CompiledPattern::new(second)],
                        strictness: *strictness,
                    },
                };
                CompiledTier {
                    key: tier.key.clone(),
                    label: tier.meta.label.clone(),
                    matcher,
                }
            })
            .collect();
        Ok(Self { ladder, tiers })
    }

    /// The ladder this classifier runs against
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Classify one record's title history
    pub fn classify(&self, record: &PlayerRecord) -> ClassificationResult {
        let mut counts = vec![0u32; self.tiers.len()];
        let mut highest: Option<HighestRank> = None;

        for title in &record.titles {
            let title_lowered = title.to_lowercase();
            for (index, tier) in self.tiers.iter().enumerate() {
                match &tier.matcher {
                    CompiledMatcher::Prefix(pattern) => {
                        if pattern.contains(&title_lowered) {
                            counts[index] += 1;
                            Self::consider(&mut highest, index, tier, title);
                        }
                    }
                    CompiledMatcher::Set {
                        patterns,
                        strictness,
                    } => {
                        for pattern in patterns {
                            if pattern.matches(&title_lowered, *strictness) {
                                counts[index] += 1;
                                Self::consider(&mut highest, index, tier, &pattern.canonical);
                            }
                        }
                    }
                }
            }
        }

        let counts: BTreeMap<String, u32> = self
            .tiers
            .iter()
            .zip(counts)
            .map(|(tier, count)| (tier.key.clone(), count))
            .collect();
        ClassificationResult { counts, highest }
    }

    /// Keep the greatest tier index; within one tier the
    /// lexicographically smallest match text wins, so the result does
    /// not depend on title iteration order
    fn consider(
        highest: &mut Option<HighestRank>,
        index: usize,
        tier: &CompiledTier,
        match_text: &str,
    ) {
        let better = match highest {
            None => true,
            Some(current) => {
                index > current.tier_index
                    || (index == current.tier_index && match_text < current.match_text.as_str())
            }
        };
        if better {
            *highest = Some(HighestRank {
                tier_key: tier.key.clone(),
                tier_index: index,
                label: tier.label.clone(),
                match_text: match_text.to_string(),
            });
        }
    }
}
