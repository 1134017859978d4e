//! Error types for the newscoder library.

use std::io;
use thiserror::Error;

/// Result type alias for newscoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing text or building coders.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the frequency dictionary file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The frequency dictionary file is not valid JSON.
    #[error("dictionary parse error: {0}")]
    DictionaryParse(#[from] serde_json::Error),

    /// The frequency dictionary has an unexpected shape
    /// (e.g. a non-integer count value).
    #[error("malformed dictionary entry for lemma {0:?}")]
    DictionaryEntry(String),

    /// The external linguistic tagger failed during lemmatization.
    #[error("tagger error: {0}")]
    Tagger(String),

    /// A code has no inverse entry in the coder.
    ///
    /// Cannot occur for codes produced by the same coder; observing it
    /// means the caller mixed codes from a different vocabulary.
    #[error("code {0} has no lemma in this coder")]
    UnknownCode(u32),
}
