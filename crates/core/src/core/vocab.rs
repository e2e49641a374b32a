//! Vocabulary storage and lookup.
//!
//! [`VocabularyList`] is what training produces: the learned words in
//! selection order with their log-probability scores. [`Vocabulary`] is the
//! id-addressable piece table of a finished model, meta pieces first, backed
//! by an `AHashMap` over `CompactString` keys for fast lookups.

use crate::config::TrainerConfig;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A learned word and its log-probability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Word string
    pub token: CompactString,
    /// `ln(frequency) - ln(total_frequency)`, never positive
    pub score: f64,
}

impl VocabularyEntry {
    /// Create a new entry.
    pub fn new(token: impl Into<CompactString>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }
}

/// Learned words in selection order (descending frequency).
///
/// Built once by the selector and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyList {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyList {
    /// Wrap entries that are already in selection order.
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabularyEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Look up a learned word's score.
    pub fn score_of(&self, token: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.score)
    }
}

impl<'a> IntoIterator for &'a VocabularyList {
    type Item = &'a VocabularyEntry;
    type IntoIter = std::slice::Iter<'a, VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Role of a piece in the final model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Learned from the corpus
    Normal,
    /// The unknown piece
    Unknown,
    /// Control symbol, never produced from text
    Control,
    /// User-defined symbol
    UserDefined,
}

/// One row of the model's piece table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub piece: CompactString,
    pub score: f64,
    pub kind: PieceKind,
}

/// IDs of the built-in meta pieces, cached for fast access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Unknown piece ID
    pub unk: u32,
    /// Beginning of sequence piece ID
    pub bos: Option<u32>,
    /// End of sequence piece ID
    pub eos: Option<u32>,
}

/// Complete piece table of a trained word model.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// ID -> piece
    pieces: Vec<Piece>,
    /// Piece string -> ID
    index: AHashMap<CompactString, u32>,
    /// Built-in meta piece IDs
    pub special: SpecialTokens,
}

impl Vocabulary {
    /// Assemble the model vocabulary from a training result.
    ///
    /// Layout: unk, bos, eos, control symbols, user-defined symbols, then the
    /// learned words in selection order. Meta pieces score 0.
    pub fn from_trained(config: &TrainerConfig, learned: &VocabularyList) -> Result<Self> {
        let mut pieces = Vec::with_capacity(config.meta_symbols_size() + learned.len());
        let meta = |piece: &str, kind| Piece {
            piece: CompactString::new(piece),
            score: 0.0,
            kind,
        };

        pieces.push(meta(config.unk_piece.as_str(), PieceKind::Unknown));
        pieces.push(meta(config.bos_piece.as_str(), PieceKind::Control));
        pieces.push(meta(config.eos_piece.as_str(), PieceKind::Control));
        for symbol in &config.control_symbols {
            pieces.push(meta(symbol.as_str(), PieceKind::Control));
        }
        for symbol in &config.user_defined_symbols {
            pieces.push(meta(symbol.as_str(), PieceKind::UserDefined));
        }
        for entry in learned {
            pieces.push(Piece {
                piece: entry.token.clone(),
                score: entry.score,
                kind: PieceKind::Normal,
            });
        }

        Self::from_pieces(pieces, &config.bos_piece, &config.eos_piece)
    }

    /// Rebuild a vocabulary from a stored piece table.
    ///
    /// Exactly one piece must be [`PieceKind::Unknown`] and piece strings
    /// must be unique.
    pub fn from_pieces(pieces: Vec<Piece>, bos_piece: &str, eos_piece: &str) -> Result<Self> {
        let mut index = AHashMap::with_capacity(pieces.len());
        let mut unk = None;

        for (id, piece) in pieces.iter().enumerate() {
            let id = u32::try_from(id).map_err(|_| {
                TokenizerError::Precondition(format!("more than {} pieces", u32::MAX))
            })?;
            if index.insert(piece.piece.clone(), id).is_some() {
                return Err(TokenizerError::Precondition(format!(
                    "piece {:?} is already defined",
                    piece.piece
                )));
            }
            if piece.kind == PieceKind::Unknown {
                if unk.is_some() {
                    return Err(TokenizerError::Precondition(
                        "more than one unknown piece".to_string(),
                    ));
                }
                unk = Some(id);
            }
        }

        let unk = unk.ok_or_else(|| {
            TokenizerError::Precondition("vocabulary has no unknown piece".to_string())
        })?;
        let special = SpecialTokens {
            unk,
            bos: index.get(bos_piece).copied(),
            eos: index.get(eos_piece).copied(),
        };

        Ok(Self {
            pieces,
            index,
            special,
        })
    }

    /// Get the ID for a piece string.
    #[inline]
    pub fn get_id(&self, piece: &str) -> Option<u32> {
        self.index.get(piece).copied()
    }

    /// Get the piece for an ID.
    #[inline]
    pub fn get_piece(&self, id: u32) -> Option<&Piece> {
        self.pieces.get(id as usize)
    }

    /// Get the piece string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.get_piece(id).map(|p| p.piece.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in ID order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}
