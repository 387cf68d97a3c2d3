//! Rank ladder configuration.
//!
//! The ladder is data, not logic: tier order, match patterns and display
//! metadata are loaded per game-season without touching the classifier.
//! Ladder order is significance — later tiers outrank earlier ones, and
//! tiers are compared only by index.

use serde::{Deserialize, Serialize};

use crate::error::{RankEngineError, Result};

/// How closed-set matchers compare a title against a canonical entry.
///
/// Source history used both behaviors for top-of-ladder titles; the
/// choice is per-tier configuration here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrictness {
    /// Title must equal the canonical entry (case-insensitive)
    Exact,
    /// Title must contain the canonical entry (case-insensitive)
    #[default]
    Contains,
}

/// Match rule of one tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierMatcher {
    /// Case-insensitive substring containment of `prefix` in the title.
    /// Not anchored to the title start, matching source behavior.
    Prefix { prefix: String },

    /// Closed set of canonical titles (e.g. season-specific top-0.1%
    /// titles), compared per `strictness`
    TitleSet {
        titles: Vec<String>,
        #[serde(default)]
        strictness: MatchStrictness,
    },

    /// Two mutually exclusive regional variants of one honor
    RegionalPair {
        first: String,
        second: String,
        #[serde(default)]
        strictness: MatchStrictness,
    },
}

/// Presentation-only tier metadata. Never consulted during
/// classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierMeta {
    /// Human-readable tier name
    pub label: String,

    /// Icon token for the consuming UI layer
    #[serde(default)]
    pub icon: String,

    /// Tint color for the consuming UI layer
    #[serde(default)]
    pub color: String,
}

/// One rung of the rank ladder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankTier {
    /// Stable short identifier, unique within the ladder
    pub key: String,

    /// Match rule
    #[serde(flatten)]
    pub matcher: TierMatcher,

    /// Display metadata
    #[serde(default)]
    pub meta: TierMeta,
}

impl RankTier {
    fn prefix(key: &str, prefix: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            matcher: TierMatcher::Prefix {
                prefix: prefix.to_string(),
            },
            meta: TierMeta {
                label: label.to_string(),
                icon: format!("pvp-rank-{}", key),
                color: color.to_string(),
            },
        }
    }
}

/// Ordered rank ladder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ladder {
    tiers: Vec<RankTier>,
}

/// Seasonal top-0.1% titles, one per rated season plus the bracket
/// variants of later seasons
const RANK_ONE_TITLES: &[&str] = &[
    "Primal Gladiator",
    "Wild Gladiator",
    "Warmongering Gladiator",
    "Vindictive Gladiator",
    "Fearless Gladiator",
    "Cruel Gladiator",
    "Ferocious Gladiator",
    "Fierce Gladiator",
    "Demonic Gladiator",
    "Dread Gladiator",
    "Sinister Gladiator",
    "Notorious Gladiator",
    "Corrupted Gladiator",
    "Sinful Gladiator",
    "Unchained Gladiator",
    "Cosmic Gladiator",
    "Eternal Gladiator",
    "Crimson Gladiator",
    "Obsidian Gladiator",
    "Draconic Gladiator",
    "Seasoned Gladiator",
    "Forged Gladiator:",
    "Forged Legend:",
    "Forged Marshal:",
    "Forged Warlord:",
    "Prized Gladiator:",
    "Prized Legend:",
    "Prized Marshal:",
    "Prized Warlord:",
    "Astral Gladiator:",
    "Astral Legend:",
    "Astral Marshal:",
    "Astral Warlord:",
];

impl Ladder {
    /// Build a ladder from tiers in ascending rank order
    pub fn new(tiers: Vec<RankTier>) -> Self {
        Self { tiers }
    }

    /// The standard rated ladder, lowest to highest
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RankTier::prefix("combatant", "Combatant", "Combatant", "#ffffff"),
                RankTier::prefix("challenger", "Challenger", "Challenger", "#1eff00"),
                RankTier::prefix("rival", "Rival", "Rival", "#0070dd"),
                RankTier::prefix("duelist", "Duelist", "Duelist", "#a335ee"),
                RankTier::prefix("elite", "Elite:", "Elite", "#ff8000"),
                RankTier::prefix("gladiator", "Gladiator:", "Gladiator", "#e268a8"),
                RankTier::prefix("legend", "Legend:", "Legend", "#e5cc80"),
                RankTier {
                    key: "rank_one".to_string(),
                    matcher: TierMatcher::TitleSet {
                        titles: RANK_ONE_TITLES.iter().map(|t| t.to_string()).collect(),
                        strictness: MatchStrictness::Contains,
                    },
                    meta: TierMeta {
                        label: "Rank 1".to_string(),
                        icon: "pvp-rank-one".to_string(),
                        color: "#ff4040".to_string(),
                    },
                },
                RankTier {
                    key: "hero".to_string(),
                    matcher: TierMatcher::RegionalPair {
                        first: "Hero of the Horde".to_string(),
                        second: "Hero of the Alliance".to_string(),
                        strictness: MatchStrictness::Contains,
                    },
                    meta: TierMeta {
                        label: "Hero".to_string(),
                        icon: "pvp-rank-hero".to_string(),
                        color: "#ffd100".to_string(),
                    },
                },
            ],
        }
    }

    /// Tiers in ascending rank order
    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// True when the ladder has no tiers
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Find a tier by key
    pub fn get(&self, key: &str) -> Option<&RankTier> {
        self.tiers.iter().find(|t| t.key == key)
    }

    /// Reject ladders the classifier cannot run against
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(RankEngineError::InvalidLadder("no tiers".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for tier in &self.tiers {
            if tier.key.trim().is_empty() {
                return Err(RankEngineError::InvalidLadder(
                    "tier with empty key".to_string(),
                ));
            }
            if !seen.insert(tier.key.as_str()) {
                return Err(RankEngineError::InvalidLadder(format!(
                    "duplicate tier key: {}",
                    tier.key
                )));
            }
            match &tier.matcher {
                TierMatcher::Prefix { prefix } if prefix.is_empty() => {
                    return Err(RankEngineError::InvalidLadder(format!(
                        "tier {} has an empty prefix",
                        tier.key
                    )));
                }
                TierMatcher::TitleSet { titles, .. }
                    if titles.is_empty() || titles.iter().any(|t| t.is_empty()) =>
                {
                    return Err(RankEngineError::InvalidLadder(format!(
                        "tier {} has an empty title set entry",
                        tier.key
                    )));
                }
                TierMatcher::RegionalPair { first, second, .. }
                    if first.is_empty() || second.is_empty() =>
                {
                    return Err(RankEngineError::InvalidLadder(format!(
                        "tier {} has an empty regional variant",
                        tier.key
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Load a ladder from its JSON configuration form
    pub fn from_json(json: &str) -> Result<Self> {
        let ladder: Ladder = serde_json::from_str(json)?;
        ladder.validate()?;
        Ok(ladder)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::standard()
    }
}
