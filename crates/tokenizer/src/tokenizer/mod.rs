//! Word model tokenizer.
//!
//! This module provides the high-level `Tokenizer` struct that maps text to
//! piece IDs with a trained word vocabulary and back.

use crate::io::ModelLoader;
use crate::pre_tokenizer::{Normalizer, Splitter, META_SPACE};
use std::path::Path;
use wordvocab_core::{
    NormalizerConfig, PieceKind, Result, TokenizerError, TrainerConfig, Vocabulary,
    VocabularyList,
};

/// Text an unknown piece decodes to.
pub const UNK_SURFACE: &str = " \u{2047} ";

/// Word-level tokenizer backed by a trained vocabulary.
///
/// Every word produced by the splitter maps to exactly one piece; words
/// outside the vocabulary map to the unknown piece.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Vocabulary
    vocab: Vocabulary,
    /// Text normalizer
    normalizer: Normalizer,
    /// Word splitter
    splitter: Splitter,
    /// User-defined pieces, longest first
    user_defined: Vec<(String, u32)>,
}

impl Tokenizer {
    /// Create a tokenizer from a vocabulary and the normalization it was
    /// trained with.
    pub fn new(vocab: Vocabulary, normalizer: NormalizerConfig) -> Self {
        let splitter = if normalizer.escape_whitespaces {
            Splitter::meta_space()
        } else {
            Splitter::whitespace()
        };
        let mut user_defined: Vec<(String, u32)> = (0u32..)
            .zip(vocab.pieces())
            .filter(|(_, p)| p.kind == PieceKind::UserDefined && !p.piece.is_empty())
            .map(|(id, p)| (p.piece.to_string(), id))
            .collect();
        user_defined.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self {
            vocab,
            normalizer: Normalizer::new(normalizer),
            splitter,
            user_defined,
        }
    }

    /// Create a tokenizer directly from a training result.
    pub fn from_training(
        trainer: &TrainerConfig,
        normalizer: &NormalizerConfig,
        learned: &VocabularyList,
    ) -> Result<Self> {
        let vocab = Vocabulary::from_trained(trainer, learned)?;
        Ok(Self::new(vocab, normalizer.clone()))
    }

    /// Load a tokenizer from a `.model` file.
    pub fn load(path: &Path) -> Result<Self> {
        let (vocab, normalizer) = ModelLoader::load(path)?;
        Ok(Self::new(vocab, normalizer))
    }

    /// Encode text to piece IDs.
    ///
    /// Words outside the vocabulary are searched for user-defined symbols,
    /// which always encode to their own piece. A meta space right before
    /// such a symbol is absorbed into it.
    ///
    /// # Arguments
    /// * `text` - The text to encode
    /// * `add_special_tokens` - Whether to add the BOS and EOS pieces
    pub fn encode(&self, text: &str, add_special_tokens: bool) -> Encoding {
        let normalized = self.normalizer.normalize(text);
        let words = self.splitter.split(&normalized);

        let mut ids = Vec::with_capacity(words.len() + 2);
        let mut pieces = Vec::with_capacity(words.len() + 2);

        if add_special_tokens {
            if let Some(bos) = self.vocab.special.bos {
                ids.push(bos);
                pieces.push(self.piece_string(bos));
            }
        }

        for word in words {
            if let Some(id) = self.lookup(word) {
                ids.push(id);
                pieces.push(word.to_string());
            } else {
                self.encode_fragments(word, &mut ids, &mut pieces);
            }
        }

        if add_special_tokens {
            if let Some(eos) = self.vocab.special.eos {
                ids.push(eos);
                pieces.push(self.piece_string(eos));
            }
        }

        Encoding { ids, pieces }
    }

    /// Decode piece IDs back to text.
    ///
    /// Control pieces are dropped and unknown pieces render as
    /// [`UNK_SURFACE`]. Fails on an ID outside the vocabulary.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let mut text = String::new();
        for &id in ids {
            let piece = self
                .vocab
                .get_piece(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            match piece.kind {
                PieceKind::Control => {}
                PieceKind::Unknown => text.push_str(UNK_SURFACE),
                PieceKind::Normal | PieceKind::UserDefined => text.push_str(&piece.piece),
            }
        }
        Ok(self.normalizer.denormalize(&text))
    }

    /// Get the ID of a piece.
    pub fn piece_to_id(&self, piece: &str) -> Option<u32> {
        self.vocab.get_id(piece)
    }

    /// Get the piece for an ID.
    pub fn id_to_piece(&self, id: u32) -> Option<&str> {
        self.vocab.get_token(id)
    }

    /// Get the score of a piece.
    pub fn score(&self, id: u32) -> Option<f64> {
        self.vocab.get_piece(id).map(|p| p.score)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Whole-word lookup. Control pieces are never produced from text.
    fn lookup(&self, word: &str) -> Option<u32> {
        self.vocab
            .get_id(word)
            .filter(|&id| self.kind(id) != Some(PieceKind::Control))
    }

    /// Cut user-defined symbols out of an unknown word; the remaining
    /// fragments are looked up whole.
    fn encode_fragments(&self, word: &str, ids: &mut Vec<u32>, pieces: &mut Vec<String>) {
        let mut start = 0;
        let mut pos = 0;
        while pos < word.len() {
            let rest = &word[pos..];
            match self.user_defined.iter().find(|(s, _)| rest.starts_with(s.as_str())) {
                Some((symbol, id)) => {
                    let before = &word[start..pos];
                    // A leading meta space belongs to the symbol.
                    if !before.is_empty() && !(start == 0 && is_meta_space(before)) {
                        self.push_fragment(before, ids, pieces);
                    }
                    ids.push(*id);
                    pieces.push(symbol.clone());
                    pos += symbol.len();
                    start = pos;
                }
                None => pos += rest.chars().next().map_or(1, char::len_utf8),
            }
        }
        if start < word.len() {
            self.push_fragment(&word[start..], ids, pieces);
        }
    }

    fn push_fragment(&self, fragment: &str, ids: &mut Vec<u32>, pieces: &mut Vec<String>) {
        ids.push(self.lookup(fragment).unwrap_or(self.vocab.special.unk));
        pieces.push(fragment.to_string());
    }

    fn kind(&self, id: u32) -> Option<PieceKind> {
        self.vocab.get_piece(id).map(|p| p.kind)
    }

    fn piece_string(&self, id: u32) -> String {
        self.vocab.get_token(id).unwrap_or_default().to_string()
    }
}

fn is_meta_space(fragment: &str) -> bool {
    let mut chars = fragment.chars();
    chars.next() == Some(META_SPACE) && chars.next().is_none()
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    /// Piece IDs
    pub ids: Vec<u32>,
    /// Surface words, one per ID
    pub pieces: Vec<String>,
}

impl Encoding {
    /// Get the number of pieces.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
