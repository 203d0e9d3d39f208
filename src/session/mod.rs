//! Session state for one interactive extraction flow.
//!
//! The presentation layer holds one [`ExtractionSession`] and drives it
//! through load / select / extract / save. Preconditions that a GUI would
//! express through button enablement are explicit errors here.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::extract::{ExtractError, TagExtractor};
use crate::report::{write_report, ReportError};
use crate::stopwords::{StopWordError, StopWordSet};
use crate::types::fingerprint::SourceVersion;
use crate::types::outcome::ExtractionResult;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no stop-word list loaded")]
    StopWordsNotLoaded,
    #[error("no document selected")]
    DocumentNotSelected,
    #[error("no tags extracted yet")]
    NothingExtracted,
    #[error(transparent)]
    StopWords(#[from] StopWordError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Where the session is in its lifecycle.
///
/// `Empty` -> `StopWordsReady` / `DocumentReady` (order-independent) ->
/// `BothReady` -> `TagsExtracted` -> `Saved`. Re-loading either input drops
/// back to `BothReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    StopWordsReady,
    DocumentReady,
    BothReady,
    TagsExtracted,
    Saved,
}

#[derive(Debug)]
struct LoadedStopWords {
    set: StopWordSet,
    version: SourceVersion,
}

/// One extraction session: the current stop-word set, the selected document,
/// and the last extraction, if any.
///
/// Single-threaded by construction — every operation takes `&mut self` and
/// runs to completion before returning.
#[derive(Debug, Default)]
pub struct ExtractionSession {
    stop_words: Option<LoadedStopWords>,
    document: Option<PathBuf>,
    extraction: Option<ExtractionResult>,
    saved_to: Option<PathBuf>,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.stop_words, &self.document) {
            (None, None) => SessionState::Empty,
            (Some(_), None) => SessionState::StopWordsReady,
            (None, Some(_)) => SessionState::DocumentReady,
            (Some(_), Some(_)) => match (&self.extraction, &self.saved_to) {
                (None, _) => SessionState::BothReady,
                (Some(_), None) => SessionState::TagsExtracted,
                (Some(_), Some(_)) => SessionState::Saved,
            },
        }
    }

    /// Load (or replace) the stop-word list. Invalidates any previous
    /// extraction.
    pub fn load_stop_words(&mut self, path: &Path) -> Result<(), SessionError> {
        let raw = fs::read(path).map_err(StopWordError::from)?;
        let version = SourceVersion::from_content(&raw);
        let set = StopWordSet::from_content(&String::from_utf8_lossy(&raw));

        self.stop_words = Some(LoadedStopWords { set, version });
        self.reset_extraction();
        Ok(())
    }

    /// Select (or replace) the document to extract from. No I/O happens
    /// until [`extract`](Self::extract); a missing file surfaces there.
    /// Invalidates any previous extraction.
    pub fn select_document(&mut self, path: &Path) {
        self.document = Some(path.to_path_buf());
        self.reset_extraction();
    }

    /// Run extraction over the selected document with the loaded stop words.
    ///
    /// Requires both inputs to be present; fails the precondition check
    /// otherwise, without touching the file system.
    pub fn extract(&mut self) -> Result<&ExtractionResult, SessionError> {
        let stop_words = self
            .stop_words
            .as_ref()
            .ok_or(SessionError::StopWordsNotLoaded)?;
        let document = self
            .document
            .as_deref()
            .ok_or(SessionError::DocumentNotSelected)?;

        let result = TagExtractor::new(&stop_words.set).extract(document)?;

        self.saved_to = None;
        Ok(&*self.extraction.insert(result))
    }

    /// Write the last extraction's frequency map to `path`.
    ///
    /// Requires a prior successful [`extract`](Self::extract).
    pub fn save_report(&mut self, path: &Path) -> Result<(), SessionError> {
        let extraction = self
            .extraction
            .as_ref()
            .ok_or(SessionError::NothingExtracted)?;

        write_report(path, &extraction.tags)?;
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }

    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref().map(|loaded| &loaded.set)
    }

    /// Fingerprint of the stop-word list as loaded, for provenance.
    pub fn stop_list_version(&self) -> Option<&SourceVersion> {
        self.stop_words.as_ref().map(|loaded| &loaded.version)
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.extraction.as_ref()
    }

    pub fn saved_to(&self) -> Option<&Path> {
        self.saved_to.as_deref()
    }

    fn reset_extraction(&mut self) {
        self.extraction = None;
        self.saved_to = None;
    }
}
