use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::FrequencyMap;
use crate::types::fingerprint::SourceVersion;

/// The final result of one extraction run.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub tags: FrequencyMap,
    pub summary: ExtractionSummary,
}

/// Counters and provenance for one extraction run.
///
/// Every number is derived from a single pass over the document:
/// `tokens_seen` splits into `tokens_empty` (normalized away entirely),
/// `tokens_stopped` (matched the stop-word set), and the counted remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Path of the document as the caller supplied it.
    pub document: String,
    pub document_version: SourceVersion,

    /// Size of the stop-word set in effect for this run.
    pub stop_words: usize,

    pub lines_read: usize,
    pub tokens_seen: usize,
    pub tokens_empty: usize,
    pub tokens_stopped: usize,

    pub distinct_tags: usize,
    pub total_count: u64,

    pub extracted_at: DateTime<Utc>, // informational only
}
