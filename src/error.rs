use thiserror::Error;

/// Main error type for the rank engine
///
/// Construction and dataset loading can fail; query paths (`lookup`,
/// `classify`) are total and never return these.
#[derive(Error, Debug)]
pub enum RankEngineError {
    /// Dataset file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset text that could not be shaped into records
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Ladder configuration rejected during validation
    #[error("Invalid ladder: {0}")]
    InvalidLadder(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for RankEngineError {
    fn from(s: String) -> Self {
        RankEngineError::Other(s)
    }
}

impl From<&str> for RankEngineError {
    fn from(s: &str) -> Self {
        RankEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RankEngineError>;
