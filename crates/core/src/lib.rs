//! Wordvocab-core - shared types for word-level vocabulary training
//!
//! This crate provides the configuration, data model and error types used by
//! the training pipeline, independent of how the corpus is read or the model
//! is stored.
//!
//! # Features
//!
//! - Trainer and normalizer configuration with validation
//! - Learned vocabulary list and the id-addressable model vocabulary
//! - Collaborator traits for corpus ingestion, word splitting and persistence
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use wordvocab_core::TrainerConfig;
//!
//! let config = TrainerConfig::builder()
//!     .vocab_size(1_000)
//!     .control_symbol("<sep>")
//!     .build()?;
//!
//! // 1 control symbol plus unk, bos and eos
//! assert_eq!(config.target_size()?, 996);
//! # Ok::<(), wordvocab_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod config;
pub use config::{
    InputFormat, ModelType, NormalizationForm, NormalizerConfig, TrainerConfig,
    TrainerConfigBuilder,
};

pub mod core;
pub use crate::core::{
    ModelWriter, Piece, PieceKind, SentenceEntry, SentenceSource, SpecialTokens, Vocabulary,
    VocabularyEntry, VocabularyList, WordSplit,
};
