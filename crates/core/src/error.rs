//! Error types for word vocabulary training.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the wordvocab crates.
///
/// Every variant is fatal for the training run that produced it: nothing is
/// retried and no partial model is written.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A configuration field is outside its domain
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A precondition of the training pipeline does not hold
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// No word was observed in the corpus, so scores are undefined
    #[error("Corpus contains no words; cannot compute log-probability scores")]
    EmptyCorpus,

    /// Error loading the corpus or a trained model
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a trained model
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Unknown piece ID
    #[error("Unknown piece ID: {0}")]
    UnknownTokenId(u32),
}

impl TokenizerError {
    /// Shorthand for [`TokenizerError::InvalidConfig`].
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for wordvocab operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
