//! Error types for the analysis pipeline.

use thiserror::Error;

/// Errors produced while analyzing a keystroke log.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The log had no lines, so there is no header.
    #[error("keystroke log is empty: expected a header line")]
    EmptyLog,

    /// No countable words remained after removing stop words.
    #[error("no words found in reconstructed text")]
    NoWords,

    /// A pattern built from the vocabulary failed to compile.
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
