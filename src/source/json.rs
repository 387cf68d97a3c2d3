use std::path::{Path, PathBuf};

use crate::core::RawRecord;
use crate::error::Result;
use crate::source::RecordSource;

/// JSON dataset source: an array of raw record objects
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonSource {
    fn load(&self) -> Result<Vec<RawRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        let records: Vec<RawRecord> = serde_json::from_str(&text)?;
        tracing::debug!(path = %self.path.display(), rows = records.len(), "loaded JSON dataset");
        Ok(records)
    }

    fn name(&self) -> &str {
        "json"
    }
}
