//! Training infrastructure for word-level vocabularies.
//!
//! This module provides word counting, vocabulary selection and the
//! trainer that runs them in sequence.

pub mod counter;
pub mod selector;
pub mod trainer;

pub use counter::{total_frequency, FrequencyTable, WordCounter};
pub use selector::VocabularySelector;
pub use trainer::WordTrainer;
