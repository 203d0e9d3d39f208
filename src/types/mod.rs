pub mod fingerprint;
pub mod outcome;

pub use fingerprint::SourceVersion;
pub use outcome::{ExtractionResult, ExtractionSummary};
