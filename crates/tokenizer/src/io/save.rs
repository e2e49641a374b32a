//! Save functionality for trained word models.
//!
//! This module writes `<prefix>.model` and `<prefix>.vocab` for a finished
//! training run.

use super::format::{prefixed_path, SerializedModel, MODEL_EXTENSION, VOCAB_EXTENSION};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wordvocab_core::{
    ModelWriter, NormalizerConfig, Result, TokenizerError, TrainerConfig, Vocabulary,
    VocabularyList,
};

/// Model saver - handles saving trained models.
#[derive(Debug, Clone)]
pub struct ModelSaver {
    /// Output prefix
    prefix: PathBuf,
}

impl ModelSaver {
    /// Create a saver writing next to `prefix`.
    pub fn new(prefix: impl Into<PathBuf>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.as_os_str().is_empty() {
            return Err(TokenizerError::invalid_config(
                "model_prefix",
                "must not be empty",
            ));
        }
        Ok(Self { prefix })
    }

    /// Create a saver for the trainer's `model_prefix`.
    pub fn from_config(trainer: &TrainerConfig) -> Result<Self> {
        Self::new(&trainer.model_prefix)
    }

    /// Path of the JSON model file.
    pub fn model_path(&self) -> PathBuf {
        prefixed_path(&self.prefix, MODEL_EXTENSION)
    }

    /// Path of the vocabulary listing.
    pub fn vocab_path(&self) -> PathBuf {
        prefixed_path(&self.prefix, VOCAB_EXTENSION)
    }

    /// Serialize the model to a structure.
    fn serialize(
        trainer: &TrainerConfig,
        normalizer: &NormalizerConfig,
        vocab: &Vocabulary,
    ) -> SerializedModel {
        SerializedModel {
            version: crate::VERSION.to_string(),
            trainer: trainer.clone(),
            normalizer: normalizer.clone(),
            pieces: vocab.pieces().to_vec(),
        }
    }

    fn create(path: &Path) -> Result<BufWriter<File>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TokenizerError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        Ok(BufWriter::new(file))
    }

    fn write_model(&self, model: &SerializedModel) -> Result<()> {
        let path = self.model_path();
        let mut writer = Self::create(&path)?;
        serde_json::to_writer_pretty(&mut writer, model)
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize model: {}", e)))?;
        writer.flush().map_err(|e| TokenizerError::io(&path, e))
    }

    fn write_vocab(&self, vocab: &Vocabulary) -> Result<()> {
        let path = self.vocab_path();
        let mut writer = Self::create(&path)?;
        for piece in vocab.pieces() {
            writeln!(writer, "{}\t{}", piece.piece, piece.score)
                .map_err(|e| TokenizerError::io(&path, e))?;
        }
        writer.flush().map_err(|e| TokenizerError::io(&path, e))
    }
}

impl ModelWriter for ModelSaver {
    fn write(
        &self,
        trainer: &TrainerConfig,
        normalizer: &NormalizerConfig,
        learned: &VocabularyList,
    ) -> Result<()> {
        // Build everything before touching the file system.
        let vocab = Vocabulary::from_trained(trainer, learned)?;
        let model = Self::serialize(trainer, normalizer, &vocab);

        self.write_model(&model)?;
        self.write_vocab(&vocab)?;

        tracing::info!(
            model = %self.model_path().display(),
            pieces = vocab.len(),
            "Saved word model"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordvocab_core::VocabularyEntry;

    fn learned() -> VocabularyList {
        VocabularyList::new(vec![
            VocabularyEntry::new("\u{2581}a", -0.5),
            VocabularyEntry::new("\u{2581}b", -1.25),
        ])
    }

    #[test]
    fn test_serialize() {
        let trainer = TrainerConfig::default();
        let vocab = Vocabulary::from_trained(&trainer, &learned()).unwrap();
        let serialized = ModelSaver::serialize(&trainer, &NormalizerConfig::default(), &vocab);

        assert_eq!(serialized.pieces.len(), 5);
        assert_eq!(serialized.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_write_files() {
        let dir = std::env::temp_dir().join("wordvocab_test_save");
        let saver = ModelSaver::new(dir.join("nested").join("word")).unwrap();
        saver
            .write(
                &TrainerConfig::default(),
                &NormalizerConfig::default(),
                &learned(),
            )
            .unwrap();

        let listing = std::fs::read_to_string(saver.vocab_path()).unwrap();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            ["<unk>\t0", "<s>\t0", "</s>\t0", "\u{2581}a\t-0.5", "\u{2581}b\t-1.25"]
        );
        assert!(saver.model_path().exists());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_nothing_written_on_invalid_vocabulary() {
        let dir = std::env::temp_dir().join("wordvocab_test_save_invalid");
        let saver = ModelSaver::new(dir.join("word")).unwrap();
        let clash = VocabularyList::new(vec![VocabularyEntry::new("<unk>", -0.1)]);

        assert!(saver
            .write(&TrainerConfig::default(), &NormalizerConfig::default(), &clash)
            .is_err());
        assert!(!saver.model_path().exists());
        assert!(!saver.vocab_path().exists());
    }

    #[test]
    fn test_requires_prefix() {
        assert!(matches!(
            ModelSaver::from_config(&TrainerConfig::default()),
            Err(TokenizerError::InvalidConfig {
                field: "model_prefix",
                ..
            })
        ));
    }
}
