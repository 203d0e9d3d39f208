//! Deterministic tag extraction engine for plain-text documents.
//!
//! `tag-core` provides stop-word loading, line-oriented tokenization,
//! frequency counting, and flat-text report writing. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte.
//!
//! The presentation layer (CLI, GUI, request handler) supplies file paths,
//! holds an [`ExtractionSession`] across calls, and renders whatever comes
//! back.

pub mod extract;
pub mod report;
pub mod session;
pub mod stopwords;
pub mod types;

pub use extract::{extract_tags, ExtractError, FrequencyMap, TagExtractor};
pub use report::{write_report, ReportError};
pub use session::{ExtractionSession, SessionError, SessionState};
pub use stopwords::{StopWordError, StopWordSet};
pub use types::{ExtractionResult, ExtractionSummary, SourceVersion};
