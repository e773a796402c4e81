//! Error types for the annotation-log pipeline.
//!
//! Unparsable lines are not errors: they are recorded as diagnostics by the
//! aggregator and processing continues. Everything in [`AtocError`] is fatal.

use std::path::PathBuf;

/// Fatal failures that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum AtocError {
    /// A page field matched the line grammar but does not fit a page number.
    #[error("line {line}: malformed page number {value:?}: {source}")]
    MalformedNumber {
        line: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    /// The annotation log could not be read.
    #[error("cannot read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output destination could not be written.
    #[error("cannot write {what} to {path:?}: {source}")]
    Output {
        what: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON dump could not be serialized.
    #[error("cannot serialize index: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AtocError>;

impl AtocError {
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub fn output(what: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            what,
            path: path.into(),
            source,
        }
    }
}
