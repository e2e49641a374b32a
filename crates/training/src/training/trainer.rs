//! Word model trainer.
//!
//! Runs the whole training pipeline for a word-level vocabulary:
//! validate the configuration, load the corpus, count words, select and
//! score the vocabulary, and optionally hand the result to a writer.

use super::counter::WordCounter;
use super::selector::VocabularySelector;
use std::time::Instant;
use wordvocab_core::{
    ModelWriter, NormalizerConfig, Result, SentenceSource, TrainerConfig, VocabularyList,
    WordSplit,
};

/// Word-level vocabulary trainer.
#[derive(Debug, Clone)]
pub struct WordTrainer {
    /// Trainer configuration
    config: TrainerConfig,
    /// Normalizer configuration the corpus was prepared with
    normalizer: NormalizerConfig,
}

impl WordTrainer {
    /// Create a new trainer.
    pub fn new(config: TrainerConfig, normalizer: NormalizerConfig) -> Self {
        Self { config, normalizer }
    }

    /// Create a trainer with default configuration and the given vocab size.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(
            TrainerConfig {
                vocab_size,
                ..Default::default()
            },
            NormalizerConfig::default(),
        )
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Check both configurations before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        self.config.target_size()?;
        self.normalizer.validate_for_training()
    }

    /// Train a word vocabulary.
    ///
    /// # Arguments
    /// * `source` - Corpus of weighted sentences
    /// * `splitter` - Word splitter applied to every sentence
    ///
    /// # Returns
    /// The learned words in descending frequency order
    pub fn train<S, W>(&self, source: &mut S, splitter: &W) -> Result<VocabularyList>
    where
        S: SentenceSource + ?Sized,
        W: WordSplit + ?Sized,
    {
        self.validate()?;
        tracing::info!(
            trainer = ?self.config,
            normalizer = ?self.normalizer,
            "Starts training"
        );

        let start = Instant::now();
        let sentences = source.load_sentences()?;
        tracing::info!(sentences = sentences.len(), "Loaded corpus");

        let mut counter = WordCounter::new(splitter);
        counter.add_sentences(&sentences);
        tracing::info!(
            distinct_words = counter.word_count(),
            occurrences = counter.total_word_occurrences(),
            "Counted words"
        );
        let table = counter.into_table();

        let selector = VocabularySelector::from_config(&self.config)?;
        let vocab = selector.select(&table)?;
        tracing::info!(
            selected = vocab.len(),
            target = self.config.target_size()?,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Selected vocabulary"
        );

        Ok(vocab)
    }

    /// Train and hand the result to `writer`.
    ///
    /// Nothing is written if training fails.
    pub fn train_and_save<S, W, M>(
        &self,
        source: &mut S,
        splitter: &W,
        writer: &M,
    ) -> Result<VocabularyList>
    where
        S: SentenceSource + ?Sized,
        W: WordSplit + ?Sized,
        M: ModelWriter + ?Sized,
    {
        let vocab = self.train(source, splitter)?;
        writer.write(&self.config, &self.normalizer, &vocab)?;
        Ok(vocab)
    }
}
