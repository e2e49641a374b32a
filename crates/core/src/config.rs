//! Trainer and normalizer configuration.
//!
//! Both structs are plain serde types so they can be read from a JSON file,
//! built in code through [`TrainerConfigBuilder`], and written back next to
//! the trained model. They are read once at the start of a training run and
//! never mutated by the pipeline.

use crate::error::{Result, TokenizerError};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Accepted range for [`TrainerConfig::character_coverage`].
pub const CHARACTER_COVERAGE_RANGE: RangeInclusive<f64> = 0.98..=1.0;

/// Accepted range for [`TrainerConfig::input_sentence_size`].
pub const INPUT_SENTENCE_SIZE_RANGE: RangeInclusive<u64> = 100..=100_000_000;

/// Number of built-in meta pieces: unknown, sequence start, sequence end.
pub const BUILTIN_META_PIECES: usize = 3;

/// Model family a configuration is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Unigram,
    Bpe,
    /// Whole whitespace-delimited words, no subword merging
    #[default]
    Word,
    Char,
}

/// Layout of the corpus files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// One sentence per line, weight 1
    #[default]
    Text,
    /// `sentence<TAB>count` per line
    Tsv,
}

/// Unicode normalization form applied before whitespace handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    /// Canonical composition
    Nfc,
    /// Canonical decomposition
    Nfd,
    /// Compatibility composition
    #[default]
    Nfkc,
    /// Compatibility decomposition
    Nfkd,
    /// No normalization
    None,
}

/// Trainer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Corpus files
    pub input: Vec<PathBuf>,
    /// Corpus file layout
    pub input_format: InputFormat,
    /// Output prefix; the saver writes `<prefix>.model` and `<prefix>.vocab`
    pub model_prefix: String,
    /// Model family, must be [`ModelType::Word`] for this trainer
    pub model_type: ModelType,
    /// Total vocabulary size including meta pieces
    pub vocab_size: usize,
    /// Fraction of characters the model must cover
    pub character_coverage: f64,
    /// Maximum number of sentences loaded from the corpus
    pub input_sentence_size: u64,
    /// Control symbols, reserved and never produced by encoding
    pub control_symbols: Vec<String>,
    /// User-defined symbols, reserved and always encoded as one piece
    pub user_defined_symbols: Vec<String>,
    /// Unknown piece; learned words containing it are dropped
    pub unk_piece: String,
    /// Sequence start piece
    pub bos_piece: String,
    /// Sequence end piece
    pub eos_piece: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            input_format: InputFormat::Text,
            model_prefix: String::new(),
            model_type: ModelType::Word,
            vocab_size: 8_000,
            character_coverage: 0.9995,
            input_sentence_size: 10_000_000,
            control_symbols: Vec::new(),
            user_defined_symbols: Vec::new(),
            unk_piece: "<unk>".to_string(),
            bos_piece: "<s>".to_string(),
            eos_piece: "</s>".to_string(),
        }
    }
}

impl TrainerConfig {
    /// Start a builder from the default configuration.
    pub fn builder() -> TrainerConfigBuilder {
        TrainerConfigBuilder::new()
    }

    /// Number of reserved vocabulary slots not learned from the corpus.
    pub fn meta_symbols_size(&self) -> usize {
        self.control_symbols.len() + self.user_defined_symbols.len() + BUILTIN_META_PIECES
    }

    /// Number of corpus-derived entries to select.
    ///
    /// Fails when the meta pieces alone exceed `vocab_size`.
    pub fn target_size(&self) -> Result<usize> {
        let meta = self.meta_symbols_size();
        self.vocab_size.checked_sub(meta).ok_or_else(|| {
            TokenizerError::Precondition(format!(
                "vocab_size {} is smaller than the {} reserved meta pieces",
                self.vocab_size, meta
            ))
        })
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<()> {
        if self.model_type != ModelType::Word {
            return Err(TokenizerError::invalid_config(
                "model_type",
                format!("expected word, got {:?}", self.model_type),
            ));
        }
        if self.vocab_size == 0 {
            return Err(TokenizerError::invalid_config(
                "vocab_size",
                "must be greater than 0",
            ));
        }
        // NaN fails `contains`, which is what we want.
        if !CHARACTER_COVERAGE_RANGE.contains(&self.character_coverage) {
            return Err(TokenizerError::invalid_config(
                "character_coverage",
                format!(
                    "{} is outside [{}, {}]",
                    self.character_coverage,
                    CHARACTER_COVERAGE_RANGE.start(),
                    CHARACTER_COVERAGE_RANGE.end()
                ),
            ));
        }
        if !INPUT_SENTENCE_SIZE_RANGE.contains(&self.input_sentence_size) {
            return Err(TokenizerError::invalid_config(
                "input_sentence_size",
                format!(
                    "{} is outside [{}, {}]",
                    self.input_sentence_size,
                    INPUT_SENTENCE_SIZE_RANGE.start(),
                    INPUT_SENTENCE_SIZE_RANGE.end()
                ),
            ));
        }
        self.validate_symbols()
    }

    /// Reserved pieces must be non-empty and pairwise distinct.
    fn validate_symbols(&self) -> Result<()> {
        let builtins = [
            ("unk_piece", &self.unk_piece),
            ("bos_piece", &self.bos_piece),
            ("eos_piece", &self.eos_piece),
        ];
        let declared = builtins
            .into_iter()
            .chain(self.control_symbols.iter().map(|s| ("control_symbols", s)))
            .chain(
                self.user_defined_symbols
                    .iter()
                    .map(|s| ("user_defined_symbols", s)),
            );

        let mut seen = AHashSet::with_capacity(self.meta_symbols_size());
        for (field, symbol) in declared {
            if symbol.is_empty() {
                return Err(TokenizerError::invalid_config(field, "empty symbol"));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(TokenizerError::invalid_config(
                    field,
                    format!("symbol {:?} is reserved more than once", symbol),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for [`TrainerConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainerConfigBuilder {
    config: TrainerConfig,
}

impl TrainerConfigBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a corpus file.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input.push(path.into());
        self
    }

    /// Set the corpus file layout.
    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.config.input_format = format;
        self
    }

    /// Set the output prefix.
    pub fn model_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.model_prefix = prefix.into();
        self
    }

    /// Set the model type.
    pub fn model_type(mut self, model_type: ModelType) -> Self {
        self.config.model_type = model_type;
        self
    }

    /// Set the total vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set the character coverage.
    pub fn character_coverage(mut self, coverage: f64) -> Self {
        self.config.character_coverage = coverage;
        self
    }

    /// Set the sentence cap.
    pub fn input_sentence_size(mut self, size: u64) -> Self {
        self.config.input_sentence_size = size;
        self
    }

    /// Add a control symbol.
    pub fn control_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.control_symbols.push(symbol.into());
        self
    }

    /// Add a user-defined symbol.
    pub fn user_defined_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.user_defined_symbols.push(symbol.into());
        self
    }

    /// Set the unknown piece.
    pub fn unk_piece(mut self, piece: impl Into<String>) -> Self {
        self.config.unk_piece = piece.into();
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TrainerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Normalizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Unicode normalization form
    pub normalization: NormalizationForm,
    /// Prepend a space so the first word looks like every other word
    pub add_dummy_prefix: bool,
    /// Trim and collapse runs of whitespace
    pub remove_extra_whitespaces: bool,
    /// Replace spaces by `▁` (U+2581)
    pub escape_whitespaces: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationForm::Nfkc,
            add_dummy_prefix: true,
            remove_extra_whitespaces: true,
            escape_whitespaces: true,
        }
    }
}

impl NormalizerConfig {
    /// Word models are learned from escaped text only.
    pub fn validate_for_training(&self) -> Result<()> {
        if !self.escape_whitespaces {
            return Err(TokenizerError::invalid_config(
                "escape_whitespaces",
                "must be enabled to train a word model",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: TokenizerError) -> &'static str {
        match err {
            TokenizerError::InvalidConfig { field, .. } => field,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(TrainerConfig::default().validate().is_ok());
        assert!(NormalizerConfig::default().validate_for_training().is_ok());
    }

    #[test]
    fn test_rejects_zero_vocab_size() {
        let err = TrainerConfig::builder().vocab_size(0).build().unwrap_err();
        assert_eq!(field_of(err), "vocab_size");
    }

    #[test]
    fn test_character_coverage_bounds() {
        assert!(TrainerConfig::builder().character_coverage(0.98).build().is_ok());
        assert!(TrainerConfig::builder().character_coverage(1.0).build().is_ok());

        let err = TrainerConfig::builder()
            .character_coverage(0.97)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "character_coverage");

        let err = TrainerConfig::builder()
            .character_coverage(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "character_coverage");
    }

    #[test]
    fn test_input_sentence_size_bounds() {
        assert!(TrainerConfig::builder().input_sentence_size(100).build().is_ok());
        assert!(TrainerConfig::builder()
            .input_sentence_size(100_000_000)
            .build()
            .is_ok());

        let err = TrainerConfig::builder()
            .input_sentence_size(99)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "input_sentence_size");

        let err = TrainerConfig::builder()
            .input_sentence_size(100_000_001)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "input_sentence_size");
    }

    #[test]
    fn test_rejects_non_word_model() {
        let err = TrainerConfig::builder()
            .model_type(ModelType::Bpe)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "model_type");
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let err = TrainerConfig::builder()
            .control_symbol("<sep>")
            .user_defined_symbol("<sep>")
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "user_defined_symbols");

        let err = TrainerConfig::builder()
            .control_symbol("<s>")
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "control_symbols");
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let err = TrainerConfig::builder().unk_piece("").build().unwrap_err();
        assert_eq!(field_of(err), "unk_piece");
    }

    #[test]
    fn test_escape_whitespaces_required() {
        let normalizer = NormalizerConfig {
            escape_whitespaces: false,
            ..Default::default()
        };
        let err = normalizer.validate_for_training().unwrap_err();
        assert_eq!(field_of(err), "escape_whitespaces");
    }

    #[test]
    fn test_target_size() {
        let config = TrainerConfig::builder()
            .vocab_size(10)
            .control_symbol("<cls>")
            .user_defined_symbol("<mask>")
            .build()
            .unwrap();
        assert_eq!(config.meta_symbols_size(), 5);
        assert_eq!(config.target_size().unwrap(), 5);

        let config = TrainerConfig::builder().vocab_size(3).build().unwrap();
        assert_eq!(config.target_size().unwrap(), 0);

        let config = TrainerConfig::builder().vocab_size(2).build().unwrap();
        assert!(matches!(
            config.target_size(),
            Err(TokenizerError::Precondition(_))
        ));
    }

    #[test]
    fn test_json_defaults_fill_missing_fields() {
        let config: TrainerConfig =
            serde_json::from_str(r#"{"vocab_size": 42, "model_type": "word"}"#).unwrap();
        assert_eq!(config.vocab_size, 42);
        assert_eq!(config.unk_piece, "<unk>");
        assert_eq!(config.input_format, InputFormat::Text);
    }
}
