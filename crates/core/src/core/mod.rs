//! Data model shared by training, persistence and encoding.
//!
//! This module contains the vocabulary types produced by training and the
//! traits that connect the training core to its collaborators.

pub mod pipeline;
pub mod vocab;

pub use pipeline::{ModelWriter, SentenceEntry, SentenceSource, WordSplit};
pub use vocab::{Piece, PieceKind, SpecialTokens, VocabularyEntry, VocabularyList, Vocabulary};
