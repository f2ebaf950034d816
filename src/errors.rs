//! Error types for dataset loading and per-request translation failures.
//!
//! # Error Handling Strategy
//!
//! - **Load errors are fatal**: anything in [`DatasetLoadError`] prevents the index from
//!   being built. The service keeps the diagnostic and reports it on every request instead
//!   of translating against an empty table.
//!
//! - **Request errors are graceful**: [`TranslationError`] values never escape the service
//!   as faults. Unknown and invalid units are rendered as markers in place; a missing
//!   phrase match becomes the `error` field of the result.
//!
//! The CLI wraps both in `anyhow::Error` where it needs to bail out.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetLoadError {
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset too large: {} ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Malformed dataset {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset contains no usable entries")]
    Empty,

    #[error("Dataset emoji {emoji:?} has no codepoints besides variation selectors")]
    InvalidEmoji { emoji: String },

    #[error("Duplicate emoji in dataset: {emoji}")]
    DuplicateEmoji { emoji: String },

    #[error("Duplicate translation '{phrase}' for {first} and {second}")]
    DuplicateTranslation { phrase: String, first: String, second: String },

    #[error("Ambiguous emoji sequences {first} and {second} match the same input")]
    AmbiguousSequence { first: String, second: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Translation service unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown emoji: {sequence}")]
    UnknownEmoji { sequence: String },

    #[error("Invalid unicode: {sequence}")]
    InvalidUnicode { sequence: String },

    #[error("No emoji found for phrase: '{phrase}'")]
    NoMatch { phrase: String },

    #[error("{0} field not included in request")]
    MissingField(&'static str),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<DatasetLoadError> for TranslationError {
    fn from(err: DatasetLoadError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
