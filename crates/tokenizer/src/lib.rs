//! Wordvocab-tokenizer - collaborators around word vocabulary training
//!
//! This crate provides everything the training core delegates: text
//! normalization, word splitting, corpus loading, model persistence, and a
//! word-level tokenizer that encodes text with a trained model.
//!
//! # Features
//!
//! - NFKC normalization and whitespace escaping with `▁`
//! - Meta-space, whitespace and regex word splitting
//! - Plain-text and TSV corpus loading with a sentence cap
//! - `<prefix>.model` (JSON) and `<prefix>.vocab` (TSV) output
//!
//! # Example
//!
//! ```rust
//! use wordvocab_tokenizer::{Normalizer, Splitter};
//!
//! let normalized = Normalizer::default().normalize("Hello  world");
//! assert_eq!(normalized, "\u{2581}Hello\u{2581}world");
//!
//! let words = Splitter::meta_space().split(&normalized);
//! assert_eq!(words, ["\u{2581}Hello", "\u{2581}world"]);
//! ```

// Re-export core types
pub use wordvocab_core::{NormalizerConfig, Result, TokenizerError, TrainerConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer};

// IO/Serialization
pub mod io;
pub use io::{CorpusLoader, ModelLoader, ModelSaver};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{Normalizer, SplitPattern, Splitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
