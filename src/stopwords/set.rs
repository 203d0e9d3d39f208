use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopWordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A set of stop words, folded to lowercase on construction.
///
/// Each entry is one LINE of the source list, lowercased verbatim: no
/// trimming of interior whitespace, no punctuation stripping. A stop-word
/// line containing punctuation therefore never matches an extracted tag,
/// since tags are reduced to `a`-`z` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopWordSet {
    inner: BTreeSet<String>,
}

impl StopWordSet {
    /// Load a stop-word list from a file, one word per line.
    ///
    /// Non-UTF-8 bytes are replaced lossily; content is never an error.
    pub fn load(path: &Path) -> Result<Self, StopWordError> {
        let raw = fs::read(path)?;
        Ok(Self::from_content(&String::from_utf8_lossy(&raw)))
    }

    /// Build a set from already-read list content, one word per line.
    pub fn from_content(content: &str) -> Self {
        let inner = content.lines().map(|line| line.to_lowercase()).collect();
        StopWordSet { inner }
    }

    /// Build a set from an in-memory word list.
    pub fn from_words(words: &[&str]) -> Self {
        let inner = words.iter().map(|w| w.to_lowercase()).collect();
        StopWordSet { inner }
    }

    /// Case-insensitive membership test (entries are pre-lowercased, so the
    /// probe must already be lowercase — the extractor guarantees this).
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.inner.iter()
    }
}
