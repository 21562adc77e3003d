//! # Error Types

use std::path::PathBuf;

/// Errors from wordpiecer operations.
#[derive(Debug, thiserror::Error)]
pub enum WordPiecerError {
    /// The vocabulary file could not be opened or read.
    #[error("vocabulary {path:?} can not be opened for loading: {source}")]
    VocabRead {
        /// The path that failed.
        path: PathBuf,

        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A configured special token does not resolve to a vocabulary id.
    #[error("special token {name} ({token:?}) is missing from the vocabulary")]
    MissingSpecialToken {
        /// The role of the token (`pad`, `cls`, ...).
        name: &'static str,

        /// The configured token string.
        token: String,
    },

    /// The empty string can not be a dictionary entry.
    #[error("empty tokens can not be inserted")]
    EmptyToken,

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// The tokenizer options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordpiecer operations.
pub type WPResult<T> = core::result::Result<T, WordPiecerError>;
