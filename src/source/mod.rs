pub mod json;
pub mod lua;

use crate::core::RawRecord;
use crate::error::Result;

pub use json::JsonSource;
pub use lua::LuaSource;

/// Trait for dataset record sources (region Lua files, JSON exports)
pub trait RecordSource {
    /// Load all raw records from the source
    fn load(&self) -> Result<Vec<RawRecord>>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
