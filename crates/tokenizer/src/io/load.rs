//! Load functionality for trained word models.

use super::format::SerializedModel;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wordvocab_core::{NormalizerConfig, Result, TokenizerError, Vocabulary};

/// Model loader - handles loading trained models.
pub struct ModelLoader;

impl ModelLoader {
    /// Load a `<prefix>.model` file.
    ///
    /// # Arguments
    /// * `path` - Path of the `.model` file
    pub fn load(path: &Path) -> Result<(Vocabulary, NormalizerConfig)> {
        let file = File::open(path).map_err(|e| {
            TokenizerError::Load(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedModel = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize model: {}", e)))?;

        Self::deserialize(serialized)
    }

    /// Rebuild the vocabulary from a serialized structure.
    fn deserialize(data: SerializedModel) -> Result<(Vocabulary, NormalizerConfig)> {
        let vocab = Vocabulary::from_pieces(
            data.pieces,
            &data.trainer.bos_piece,
            &data.trainer.eos_piece,
        )
        .map_err(|e| TokenizerError::Load(format!("Invalid piece table: {}", e)))?;

        Ok((vocab, data.normalizer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::ModelSaver;
    use wordvocab_core::{
        ModelWriter, PieceKind, TrainerConfig, VocabularyEntry, VocabularyList,
    };

    #[test]
    fn test_load_roundtrip() {
        let dir = std::env::temp_dir().join("wordvocab_test_load");
        let saver = ModelSaver::new(dir.join("word")).unwrap();

        let trainer = TrainerConfig::builder()
            .user_defined_symbol("<mask>")
            .build()
            .unwrap();
        let normalizer = NormalizerConfig {
            add_dummy_prefix: false,
            ..Default::default()
        };
        let learned = VocabularyList::new(vec![
            VocabularyEntry::new("hello", -0.7),
            VocabularyEntry::new("world", -0.9),
        ]);
        saver.write(&trainer, &normalizer, &learned).unwrap();

        let (vocab, loaded_normalizer) = ModelLoader::load(&saver.model_path()).unwrap();

        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.special.unk, 0);
        assert_eq!(vocab.special.eos, Some(2));
        assert_eq!(vocab.get_id("world"), Some(5));
        assert_eq!(vocab.get_piece(3).unwrap().kind, PieceKind::UserDefined);
        assert!((vocab.get_piece(4).unwrap().score + 0.7).abs() < 1e-12);
        assert_eq!(loaded_normalizer, normalizer);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("wordvocab_test_load_missing.model");
        assert!(matches!(
            ModelLoader::load(&path),
            Err(TokenizerError::Load(_))
        ));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let path = std::env::temp_dir().join("wordvocab_test_load_garbage.model");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ModelLoader::load(&path),
            Err(TokenizerError::Load(_))
        ));
        std::fs::remove_file(path).ok();
    }
}
