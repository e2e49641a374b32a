//! Format definitions for model serialization.
//!
//! A trained word model is stored as two files sharing a prefix:
//! `<prefix>.model`, a JSON document holding everything needed to rebuild
//! the tokenizer, and `<prefix>.vocab`, a human-readable `piece<TAB>score`
//! listing in ID order.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use wordvocab_core::{NormalizerConfig, Piece, TrainerConfig};

/// Extension of the JSON model file.
pub const MODEL_EXTENSION: &str = "model";

/// Extension of the plain-text vocabulary listing.
pub const VOCAB_EXTENSION: &str = "vocab";

/// Complete model serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedModel {
    /// Format version
    pub version: String,
    /// Configuration the model was trained with
    pub trainer: TrainerConfig,
    /// Normalization applied to text before encoding
    pub normalizer: NormalizerConfig,
    /// Pieces in ID order
    pub pieces: Vec<Piece>,
}

/// Append `.{extension}` to a model prefix.
///
/// The prefix may itself contain dots, so this never replaces an existing
/// extension.
pub fn prefixed_path(prefix: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordvocab_core::PieceKind;

    #[test]
    fn test_prefixed_path_keeps_dots() {
        let path = prefixed_path(Path::new("out/word.v2"), MODEL_EXTENSION);
        assert_eq!(path, PathBuf::from("out/word.v2.model"));
    }

    #[test]
    fn test_piece_kind_wire_names() {
        let piece = Piece {
            piece: "<mask>".into(),
            score: 0.0,
            kind: PieceKind::UserDefined,
        };
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"piece":"<mask>","score":0.0,"kind":"user_defined"}"#);
    }
}
