pub mod history;
pub mod record;

pub use history::{ClassificationResult, HighestRank, LookupOutcome, LookupResponse};
pub use record::{PlayerRecord, RawRecord};
