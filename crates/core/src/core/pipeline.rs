//! Seams between the training core and its collaborators.
//!
//! Ingestion, word splitting and persistence live outside the core; these
//! traits are the whole contract the core needs from them.

use crate::config::{NormalizerConfig, TrainerConfig};
use crate::core::vocab::VocabularyList;
use crate::error::Result;

/// A sentence and the number of times it is counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEntry {
    pub text: String,
    pub weight: u64,
}

impl SentenceEntry {
    pub fn new(text: impl Into<String>, weight: u64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Supplies the corpus as an ordered sequence of weighted sentences.
pub trait SentenceSource {
    fn load_sentences(&mut self) -> Result<Vec<SentenceEntry>>;
}

/// In-memory corpora are their own source.
impl SentenceSource for Vec<SentenceEntry> {
    fn load_sentences(&mut self) -> Result<Vec<SentenceEntry>> {
        Ok(std::mem::take(self))
    }
}

/// Splits a sentence into word substrings.
///
/// Implementations must be pure: the same input always yields the same words.
pub trait WordSplit {
    fn split_into_words<'a>(&self, sentence: &'a str) -> Vec<&'a str>;
}

/// Durably stores a finished training run.
pub trait ModelWriter {
    fn write(
        &self,
        trainer: &TrainerConfig,
        normalizer: &NormalizerConfig,
        vocab: &VocabularyList,
    ) -> Result<()>;
}
