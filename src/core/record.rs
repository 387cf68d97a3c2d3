use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw dataset entry as it appears in a region file.
///
/// Beyond the identity, alias list and guid, a row is a loose bag of
/// fields. String-valued extras are title/achievement names; anything
/// else (the numeric `idN` companions of `nameN`, booleans, nested
/// tables) is carried but ignored by the classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    /// Canonical "Name-Realm" identity
    #[serde(default)]
    pub character: String,

    /// Alternate identities resolving to this record
    #[serde(default)]
    pub alts: Vec<String>,

    /// Numeric character id, when the dataset carries one
    #[serde(default)]
    pub guid: Option<u64>,

    /// Remaining fields of the row, keyed as in the source data
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawRecord {
    /// Create a raw record with just an identity
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            alts: Vec::new(),
            guid: None,
            extra: BTreeMap::new(),
        }
    }

    /// Append a title string under the next free `nameN` key
    pub fn push_title(&mut self, title: impl Into<String>) {
        let n = self.titles().len() + 1;
        self.extra
            .insert(format!("name{}", n), Value::String(title.into()));
    }

    /// Title strings of this row: every string-valued extra field
    pub fn titles(&self) -> Vec<String> {
        self.extra
            .values()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// A record without a usable identity cannot be indexed
    pub fn is_malformed(&self) -> bool {
        self.character.trim().is_empty()
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One indexed player with the title history the classifier scans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    /// Canonical "Name-Realm" identity, as given by the dataset
    pub identity: String,

    /// Numeric character id, when known
    pub guid: Option<u64>,

    /// Alternate identities registered against this record
    pub aliases: Vec<String>,

    /// Unordered bag of free-text title/achievement strings
    pub titles: Vec<String>,
}

impl PlayerRecord {
    /// Create a new record with required fields
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            guid: None,
            aliases: Vec::new(),
            titles: Vec::new(),
        }
    }

    /// Build the indexed form of a raw row
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            identity: raw.character.trim().to_string(),
            guid: raw.guid,
            aliases: raw.alts.clone(),
            titles: raw.titles(),
        }
    }

    /// Name portion of the identity (everything before the first '-')
    pub fn name(&self) -> &str {
        self.identity
            .split_once('-')
            .map(|(name, _)| name)
            .unwrap_or(&self.identity)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
