use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The winning rung of the ladder for one record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighestRank {
    /// Tier key, stable across ladder revisions
    pub tier_key: String,

    /// Index of the tier in ladder order (higher = better)
    pub tier_index: usize,

    /// Display label copied from the tier metadata
    pub label: String,

    /// Title that produced the match: the original title string for
    /// prefix tiers, the canonical set entry for set/pair tiers
    pub match_text: String,
}

/// Classification of one player's title history against a ladder
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// Tier key -> number of titles that matched that tier
    pub counts: BTreeMap<String, u32>,

    /// Greatest-index tier with at least one match, if any
    pub highest: Option<HighestRank>,
}

impl ClassificationResult {
    /// Total matches across all tiers (a title can count more than once
    /// when tier patterns overlap)
    pub fn total_matches(&self) -> u32 {
        self.counts.values().sum()
    }

    /// True when no title matched any tier ("empty history")
    pub fn is_empty_history(&self) -> bool {
        self.highest.is_none()
    }
}

/// Outcome of a lookup against the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase", tag = "outcome", content = "result")]
pub enum LookupOutcome {
    /// The identity resolved to a record; the classification may still
    /// be an empty history
    Classified(ClassificationResult),

    /// The identity has no entry in the dataset. Distinct from an empty
    /// history: there is no record at all
    NotSeen,
}

impl LookupOutcome {
    /// True for identities absent from the dataset
    pub fn is_not_seen(&self) -> bool {
        matches!(self, LookupOutcome::NotSeen)
    }

    /// The classification, when the identity was found
    pub fn classification(&self) -> Option<&ClassificationResult> {
        match self {
            LookupOutcome::Classified(result) => Some(result),
            LookupOutcome::NotSeen => None,
        }
    }
}

/// Lookup response with outcome and metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupResponse {
    /// Normalized identity key the lookup resolved to
    pub identity: String,

    /// Canonical identity of the matched record, when one was found
    pub canonical_identity: Option<String>,

    /// Classification or the not-seen sentinel
    pub outcome: LookupOutcome,

    /// Whether the outcome came from the lookup cache
    pub from_cache: bool,

    /// Lookup latency in milliseconds
    pub latency_ms: f64,
}

impl LookupResponse {
    /// One-line "Name: Rank" announcement string
    pub fn announcement(&self) -> String {
        let who = self.canonical_identity.as_deref().unwrap_or(&self.identity);
        match &self.outcome {
            LookupOutcome::NotSeen => format!("{}: no rated history", who),
            LookupOutcome::Classified(result) => match &result.highest {
                Some(rank) => format!("{}: {}", who, rank.label),
                None => format!("{}: no rated history", who),
            },
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        let outcome = match &self.outcome {
            LookupOutcome::NotSeen => "not seen".to_string(),
            LookupOutcome::Classified(result) => match &result.highest {
                Some(rank) => format!(
                    "{} via \"{}\" ({} matches)",
                    rank.label,
                    rank.match_text,
                    result.total_matches()
                ),
                None => "empty history".to_string(),
            },
        };
        format!(
            "{} - {} [cache: {}] {:.2}ms",
            self.identity, outcome, self.from_cache, self.latency_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(highest: Option<HighestRank>) -> LookupResponse {
        LookupResponse {
            identity: "thrall-ragnaros".to_string(),
            canonical_identity: Some("Thrall-Ragnaros".to_string()),
            outcome: LookupOutcome::Classified(ClassificationResult {
                counts: BTreeMap::new(),
                highest,
            }),
            from_cache: false,
            latency_ms: 0.1,
        }
    }

    #[test]
    fn test_announcement_with_rank() {
        let response = classified(Some(HighestRank {
            tier_key: "gladiator".to_string(),
            tier_index: 5,
            label: "Gladiator".to_string(),
            match_text: "Gladiator: Season 3".to_string(),
        }));
        assert_eq!(response.announcement(), "Thrall-Ragnaros: Gladiator");
    }

    #[test]
    fn test_announcement_empty_history() {
        let response = classified(None);
        assert_eq!(response.announcement(), "Thrall-Ragnaros: no rated history");
    }

    #[test]
    fn test_not_seen_is_distinct_from_empty_history() {
        let not_seen = LookupOutcome::NotSeen;
        let empty = LookupOutcome::Classified(ClassificationResult::default());

        assert!(not_seen.is_not_seen());
        assert!(!empty.is_not_seen());
        assert!(empty.classification().unwrap().is_empty_history());
        assert_ne!(not_seen, empty);
    }

    #[test]
    fn test_outcome_serialization_round_trip() {
        let outcome = LookupOutcome::Classified(ClassificationResult::default());
        let json = serde_json::to_string(&outcome).unwrap();
        let back: LookupOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
