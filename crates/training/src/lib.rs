//! Wordvocab-training - word-level vocabulary training
//!
//! This crate provides the training algorithm that turns a weighted corpus
//! of sentences into a scored word vocabulary.
//!
//! # Features
//!
//! - Weighted word frequency counting over any [`WordSplit`] implementation
//! - Deterministic frequency ranking with lexicographic tie-breaking
//! - Natural-log relative frequency scores
//! - Integration with wordvocab-core for configuration and persistence seams
//!
//! # Example
//!
//! ```rust
//! use wordvocab_training::{SentenceEntry, WordSplit, WordTrainer};
//!
//! struct Whitespace;
//!
//! impl WordSplit for Whitespace {
//!     fn split_into_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
//!         sentence.split_whitespace().collect()
//!     }
//! }
//!
//! // 3 reserved meta pieces leave room for 2 words
//! let trainer = WordTrainer::with_vocab_size(5);
//! let mut corpus = vec![SentenceEntry::new("a b a", 3), SentenceEntry::new("b c", 1)];
//! let vocab = trainer.train(&mut corpus, &Whitespace)?;
//!
//! assert_eq!(vocab.len(), 2);
//! assert_eq!(vocab.as_slice()[0].token, "a");
//! # Ok::<(), wordvocab_training::TokenizerError>(())
//! ```

pub use wordvocab_core::{
    ModelWriter, Result, SentenceEntry, SentenceSource, TokenizerError, VocabularyEntry,
    VocabularyList, WordSplit,
};

// Training infrastructure
pub mod training;
pub use training::{FrequencyTable, VocabularySelector, WordCounter, WordTrainer};
