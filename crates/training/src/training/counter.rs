//! Word counting for vocabulary training.
//!
//! This module accumulates weighted word frequencies over a corpus of
//! sentences. Counting is commutative, so the order sentences arrive in
//! does not affect the resulting table.

use ahash::AHashMap;
use compact_str::CompactString;
use wordvocab_core::{SentenceEntry, WordSplit};

/// Word -> aggregated frequency.
pub type FrequencyTable = AHashMap<CompactString, u64>;

/// Counter for weighted word frequencies.
pub struct WordCounter<'s, S: WordSplit + ?Sized> {
    /// Splitter applied to every sentence
    splitter: &'s S,
    /// Word -> frequency count
    freq: FrequencyTable,
    /// Number of sentences consumed
    sentences: usize,
}

impl<'s, S: WordSplit + ?Sized> WordCounter<'s, S> {
    /// Create a new counter using the given word splitter.
    pub fn new(splitter: &'s S) -> Self {
        Self {
            splitter,
            freq: FrequencyTable::new(),
            sentences: 0,
        }
    }

    /// Add every word of a sentence, each counted `weight` times.
    pub fn add_sentence(&mut self, text: &str, weight: u64) {
        for word in self.splitter.split_into_words(text) {
            let count = self.freq.entry(CompactString::new(word)).or_insert(0);
            *count = count.saturating_add(weight);
        }
        self.sentences += 1;
    }

    /// Add a batch of sentence entries.
    pub fn add_sentences<'a, I>(&mut self, sentences: I)
    where
        I: IntoIterator<Item = &'a SentenceEntry>,
    {
        for sentence in sentences {
            self.add_sentence(&sentence.text, sentence.weight);
        }
    }

    /// Get the number of distinct words seen so far.
    pub fn word_count(&self) -> usize {
        self.freq.len()
    }

    /// Get the number of sentences consumed.
    pub fn sentence_count(&self) -> usize {
        self.sentences
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        total_frequency(&self.freq)
    }

    /// Finish counting and hand over the table.
    pub fn into_table(self) -> FrequencyTable {
        self.freq
    }
}

/// Sum of all frequencies in a table.
pub fn total_frequency(table: &FrequencyTable) -> u64 {
    table
        .values()
        .fold(0u64, |sum, &count| sum.saturating_add(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Whitespace;

    impl WordSplit for Whitespace {
        fn split_into_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
            sentence.split_whitespace().collect()
        }
    }

    #[test]
    fn test_add_sentence() {
        let mut counter = WordCounter::new(&Whitespace);
        counter.add_sentence("a b a", 3);

        let table = counter.into_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some(&6));
        assert_eq!(table.get("b"), Some(&3));
    }

    #[test]
    fn test_weights_accumulate_across_sentences() {
        let corpus = vec![SentenceEntry::new("a b a", 3), SentenceEntry::new("b c", 1)];
        let mut counter = WordCounter::new(&Whitespace);
        counter.add_sentences(&corpus);

        assert_eq!(counter.sentence_count(), 2);
        assert_eq!(counter.word_count(), 3);

        let table = counter.into_table();
        assert_eq!(table.get("a"), Some(&6));
        assert_eq!(table.get("b"), Some(&4));
        assert_eq!(table.get("c"), Some(&1));
    }

    #[test]
    fn test_conservation() {
        let corpus = vec![
            SentenceEntry::new("the cat sat on the mat", 2),
            SentenceEntry::new("the dog", 5),
            SentenceEntry::new("", 100),
            SentenceEntry::new("mat", 0),
        ];
        let expected: u64 = corpus
            .iter()
            .map(|s| s.weight * s.text.split_whitespace().count() as u64)
            .sum();

        let mut counter = WordCounter::new(&Whitespace);
        counter.add_sentences(&corpus);
        assert_eq!(counter.total_word_occurrences(), expected);
        assert_eq!(expected, 22);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![SentenceEntry::new("x y", 2), SentenceEntry::new("y z z", 1)];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();

        let mut a = WordCounter::new(&Whitespace);
        a.add_sentences(&forward);
        let mut b = WordCounter::new(&Whitespace);
        b.add_sentences(&backward);

        let sorted = |table: FrequencyTable| {
            let mut rows: Vec<_> = table.into_iter().collect();
            rows.sort();
            rows
        };
        assert_eq!(sorted(a.into_table()), sorted(b.into_table()));
    }

    #[test]
    fn test_zero_weight_creates_entry() {
        let mut counter = WordCounter::new(&Whitespace);
        counter.add_sentence("ghost", 0);
        let table = counter.into_table();
        assert_eq!(table.get("ghost"), Some(&0));
        assert_eq!(total_frequency(&table), 0);
    }
}
