pub mod frequency;
pub mod tokenizer;

use std::fs;
use std::path::Path;

use chrono::Utc;
use thiserror::Error;

use crate::stopwords::StopWordSet;
use crate::types::fingerprint::SourceVersion;
use crate::types::outcome::{ExtractionResult, ExtractionSummary};

pub use frequency::FrequencyMap;
pub use tokenizer::normalize_token;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tokenizes a document line by line, normalizes and stop-filters each
/// token, and accumulates a frequency map.
///
/// Borrows the stop-word set for the duration of a run; the set is never
/// mutated by extraction.
pub struct TagExtractor<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> TagExtractor<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Extract tags from the document at `path`.
    ///
    /// The file is consumed in a single read; on any I/O failure no partial
    /// result is returned. Non-UTF-8 bytes are replaced lossily and then
    /// stripped by normalization, never an error.
    pub fn extract(&self, path: &Path) -> Result<ExtractionResult, ExtractError> {
        let raw = fs::read(path)?;
        let document_version = SourceVersion::from_content(&raw);
        let content = String::from_utf8_lossy(&raw);

        Ok(self.extract_content(&content, path.display().to_string(), document_version))
    }

    fn extract_content(
        &self,
        content: &str,
        document: String,
        document_version: SourceVersion,
    ) -> ExtractionResult {
        let mut tags = FrequencyMap::new();

        let mut lines_read = 0;
        let mut tokens_seen = 0;
        let mut tokens_empty = 0;
        let mut tokens_stopped = 0;

        for line in content.lines() {
            lines_read += 1;
            for raw_token in line.split_whitespace() {
                tokens_seen += 1;
                let tag = normalize_token(raw_token);
                // Empty normalizations are discarded before any stop-word
                // consideration.
                if tag.is_empty() {
                    tokens_empty += 1;
                } else if self.stop_words.contains(&tag) {
                    tokens_stopped += 1;
                } else {
                    tags.increment(tag);
                }
            }
        }

        debug_assert_eq!(
            tags.total(),
            (tokens_seen - tokens_empty - tokens_stopped) as u64,
            "counted tags must equal surviving tokens"
        );

        let summary = ExtractionSummary {
            document,
            document_version,
            stop_words: self.stop_words.len(),
            lines_read,
            tokens_seen,
            tokens_empty,
            tokens_stopped,
            distinct_tags: tags.len(),
            total_count: tags.total(),
            extracted_at: Utc::now(),
        };

        ExtractionResult { tags, summary }
    }
}

/// Extract tags from the document at `path`, returning only the counts.
pub fn extract_tags(path: &Path, stop_words: &StopWordSet) -> Result<FrequencyMap, ExtractError> {
    TagExtractor::new(stop_words)
        .extract(path)
        .map(|result| result.tags)
}
