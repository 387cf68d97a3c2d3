//! # PvP Rank Engine
//!
//! Historical PvP rank lookup over a bundled per-region dataset:
//! - Case/accent/whitespace-insensitive identity index with alt
//!   resolution
//! - Configurable rank-ladder classification of free-text title
//!   histories
//! - Memoizing lookup cache with a `NotSeen` sentinel distinct from
//!   "no rated history"
//! - Region Lua-table and JSON dataset loaders
//!
//! ## Example Usage
//!
//! ```rust
//! use pvp_rank_engine::{Ladder, RankEngine, RawRecord};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut record = RawRecord::new("Thrall-Ragnaros");
//!     record.push_title("Gladiator: Season 3");
//!
//!     let engine = RankEngine::new(vec![record], Ladder::standard())?;
//!
//!     let response = engine.lookup("thrall-ragnaros");
//!     println!("{}", response.announcement());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod classify;
pub mod core;
pub mod engine;
pub mod error;
pub mod index;
pub mod ladder;
pub mod source;

// Re-export primary types
pub use cache::{CacheStats, HistoryCache, MemoryCache};
pub use classify::Classifier;
pub use core::{ClassificationResult, HighestRank, LookupOutcome, LookupResponse};
pub use core::{PlayerRecord, RawRecord};
pub use engine::RankEngine;
pub use error::{RankEngineError, Result};
pub use index::{normalize, DatasetIndex};
pub use ladder::{Ladder, MatchStrictness, RankTier, TierMatcher, TierMeta};
pub use source::{JsonSource, LuaSource, RecordSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
