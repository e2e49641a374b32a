//! Vocabulary selection.
//!
//! Turns a completed [`FrequencyTable`] into the scored, truncated
//! [`VocabularyList`]: words are ranked by descending frequency, ties are
//! broken by ascending byte order of the word, words containing the unknown
//! marker are dropped, and each survivor is scored with its natural-log
//! relative frequency.

use super::counter::{total_frequency, FrequencyTable};
use compact_str::CompactString;
use std::cmp::Ordering;
use wordvocab_core::{Result, TokenizerError, TrainerConfig, VocabularyEntry, VocabularyList};

/// A word competing for a vocabulary slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WordCandidate<'t> {
    word: &'t CompactString,
    count: u64,
}

// Higher count first, then lexicographically smaller word first.
impl Ord for WordCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.as_bytes().cmp(other.word.as_bytes()))
    }
}

impl PartialOrd for WordCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot selector producing the learned vocabulary.
///
/// `select` consumes the selector, so the list it fills is always empty
/// when selection starts and is never appended to afterwards.
#[derive(Debug)]
pub struct VocabularySelector<'a> {
    /// Number of words to keep
    target_size: usize,
    /// Words containing this substring are never selected
    unk_marker: &'a str,
    /// Entries collected so far
    selected: Vec<VocabularyEntry>,
}

impl<'a> VocabularySelector<'a> {
    /// Create a selector keeping at most `target_size` words.
    pub fn new(target_size: usize, unk_marker: &'a str) -> Self {
        Self {
            target_size,
            unk_marker,
            selected: Vec::new(),
        }
    }

    /// Create a selector sized by the configuration's meta symbols.
    pub fn from_config(config: &'a TrainerConfig) -> Result<Self> {
        Ok(Self::new(config.target_size()?, &config.unk_piece))
    }

    /// Rank, filter, truncate and score the table.
    ///
    /// Fails with [`TokenizerError::EmptyCorpus`] when the table holds no
    /// occurrences, since no score can be computed.
    pub fn select(mut self, table: &FrequencyTable) -> Result<VocabularyList> {
        let total = total_frequency(table);
        if total == 0 {
            return Err(TokenizerError::EmptyCorpus);
        }
        let log_total = (total as f64).ln();

        let mut candidates: Vec<WordCandidate<'_>> = table
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(word, &count)| WordCandidate { word, count })
            .collect();
        candidates.sort_unstable();

        self.selected.reserve(self.target_size.min(candidates.len()));
        let mut skipped = 0usize;

        for candidate in candidates {
            if self.selected.len() == self.target_size {
                break;
            }
            if candidate.word.contains(self.unk_marker) {
                skipped += 1;
                continue;
            }
            let score = (candidate.count as f64).ln() - log_total;
            self.selected
                .push(VocabularyEntry::new(candidate.word.clone(), score));
        }

        if skipped > 0 {
            tracing::debug!(
                skipped,
                marker = self.unk_marker,
                "Dropped words containing the unknown marker"
            );
        }

        Ok(VocabularyList::new(self.selected))
    }
}
