//! Region dataset loader.
//!
//! The bundled per-region dataset is a Lua table of rows shaped like
//!
//! ```lua
//! { character="name-realm", alts={"alt-realm"}, guid=123,
//!   id1=401, name1="Duelist: Season 1", id2=402, name2="..." },
//! ```
//!
//! Rows are recovered with regexes rather than a Lua runtime; a row
//! that cannot be shaped is skipped, never fatal.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::core::RawRecord;
use crate::error::Result;
use crate::source::RecordSource;

fn row_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        Regex::new(r#"\{(?:[^{}]|\{[^{}]*\})*?character\s*=\s*"(?:[^"\\]|\\.)*"(?:[^{}]|\{[^{}]*\})*?\}"#)
            .expect("row pattern")
    })
}

fn character_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        Regex::new(r#"character\s*=\s*"((?:[^"\\]|\\.)*)""#).expect("character pattern")
    })
}

fn guid_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r"guid\s*=\s*(\d+)").expect("guid pattern"))
}

fn alts_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r"alts\s*=\s*\{([^}]*)\}").expect("alts pattern"))
}

fn title_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        Regex::new(r#"name(\d+)\s*=\s*"((?:[^"\\]|\\.)*)""#).expect("title pattern")
    })
}

fn string_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("string pattern"))
}

fn unescape(s: &str) -> String {
    s.replace("\\\"", "\"").replace("\\\\", "\\")
}

/// Parse region-file text into raw records
pub fn parse_str(text: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for row in row_rx().find_iter(text) {
        let block = row.as_str();
        let Some(character) = character_rx()
            .captures(block)
            .map(|c| unescape(&c[1]))
        else {
            continue;
        };

        let mut record = RawRecord::new(character);
        record.guid = guid_rx()
            .captures(block)
            .and_then(|c| c[1].parse().ok());
        if let Some(alts) = alts_rx().captures(block) {
            record.alts = string_rx()
                .captures_iter(&alts[1])
                .map(|c| unescape(&c[1]))
                .collect();
        }
        for title in title_rx().captures_iter(block) {
            record
                .extra
                .insert(format!("name{}", &title[1]), Value::String(unescape(&title[2])));
        }
        records.push(record);
    }
    records
}

/// Region Lua-table dataset source
pub struct LuaSource {
    path: PathBuf,
}

impl LuaSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for LuaSource {
    fn load(&self) -> Result<Vec<RawRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        let records = parse_str(&text);
        tracing::debug!(path = %self.path.display(), rows = records.len(), "loaded region file");
        Ok(records)
    }

    fn name(&self) -> &str {
        "lua"
    }
}
