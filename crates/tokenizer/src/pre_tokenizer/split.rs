//! Word splitting for pre-tokenization.
//!
//! This module provides the word splitting strategies used before counting
//! or encoding: plain whitespace splitting, meta-space splitting for
//! escaped text, and regex-based separators.

use super::normalize::META_SPACE;
use regex::Regex;
use wordvocab_core::{Result, TokenizerError, WordSplit};

/// Splitting patterns.
#[derive(Debug, Clone)]
pub enum SplitPattern {
    /// Split on Unicode whitespace
    Whitespace,
    /// Start a new word at every `▁`, keeping it as the word's prefix
    MetaSpace,
    /// Split on matches of a separator regex
    Custom(Regex),
}

/// Word splitter for pre-tokenization.
#[derive(Debug, Clone)]
pub struct Splitter {
    /// Pattern to split on
    pattern: SplitPattern,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new(pattern: SplitPattern) -> Self {
        Self { pattern }
    }

    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self::new(SplitPattern::Whitespace)
    }

    /// Create a splitter for whitespace-escaped text.
    pub fn meta_space() -> Self {
        Self::new(SplitPattern::MetaSpace)
    }

    /// Create a splitter from a separator regex.
    pub fn custom(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| {
            TokenizerError::invalid_config("split_pattern", format!("{pattern:?}: {e}"))
        })?;
        Ok(Self::new(SplitPattern::Custom(re)))
    }

    /// Split text into words.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match &self.pattern {
            SplitPattern::Whitespace => text.split_whitespace().collect(),
            SplitPattern::MetaSpace => split_meta_space(text),
            SplitPattern::Custom(re) => re.split(text).filter(|s| !s.is_empty()).collect(),
        }
    }
}

impl WordSplit for Splitter {
    fn split_into_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.split(sentence)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::meta_space()
    }
}

fn split_meta_space(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if ch == META_SPACE && i > start {
            words.push(&text[start..i]);
            start = i;
        }
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}
