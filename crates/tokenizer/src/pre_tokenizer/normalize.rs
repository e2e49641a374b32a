//! Text normalization for pre-tokenization.
//!
//! Applies Unicode normalization (NFC, NFD, NFKC, NFKD), whitespace cleanup
//! and whitespace escaping. With escaping enabled every space becomes `▁`
//! (U+2581), so word boundaries survive as part of the words themselves.

use unicode_normalization::UnicodeNormalization;
use wordvocab_core::{NormalizationForm, NormalizerConfig};

/// Meta space character that replaces ASCII spaces.
pub const META_SPACE: char = '\u{2581}';

const META_SPACE_STR: &str = "\u{2581}";

/// Text normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizer that only applies a Unicode form and leaves spaces alone.
    pub fn unicode_only(form: NormalizationForm) -> Self {
        Self::new(NormalizerConfig {
            normalization: form,
            add_dummy_prefix: false,
            remove_extra_whitespaces: false,
            escape_whitespaces: false,
        })
    }

    /// Normalize text.
    ///
    /// Returns an empty string when nothing but whitespace remains and
    /// whitespace removal is enabled.
    pub fn normalize(&self, text: &str) -> String {
        let unicode: String = match self.config.normalization {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
            NormalizationForm::None => text.to_string(),
        };

        let spaced = if self.config.remove_extra_whitespaces {
            collapse_whitespace(&unicode)
        } else {
            unicode
        };
        if spaced.is_empty() {
            return spaced;
        }

        let mut out = String::with_capacity(spaced.len() + 3);
        if self.config.add_dummy_prefix {
            out.push(' ');
        }
        out.push_str(&spaced);

        if self.config.escape_whitespaces {
            out.replace(' ', META_SPACE_STR)
        } else {
            out
        }
    }

    /// Undo whitespace escaping and the dummy prefix.
    pub fn denormalize(&self, text: &str) -> String {
        let unescaped = if self.config.escape_whitespaces {
            text.replace(META_SPACE, " ")
        } else {
            text.to_string()
        };
        match unescaped.strip_prefix(' ') {
            Some(rest) if self.config.add_dummy_prefix => rest.to_string(),
            _ => unescaped,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Trim and replace every run of whitespace with a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let normalizer = Normalizer::unicode_only(NormalizationForm::Nfc);
        // Combining characters
        let text = "e\u{0301}"; // e + combining acute accent
        let result = normalizer.normalize(text);
        assert_eq!(result, "\u{00e9}"); // é as single character
    }

    #[test]
    fn test_nfd_normalization() {
        let normalizer = Normalizer::unicode_only(NormalizationForm::Nfd);
        let text = "\u{00e9}"; // é as single character
        let result = normalizer.normalize(text);
        assert_eq!(result, "e\u{0301}"); // é decomposed
    }

    #[test]
    fn test_nfkc_folds_compatibility_forms() {
        let normalizer = Normalizer::unicode_only(NormalizationForm::Nfkc);
        assert_eq!(normalizer.normalize("\u{FF21}\u{FB01}"), "Afi");
    }

    #[test]
    fn test_no_normalization() {
        let normalizer = Normalizer::unicode_only(NormalizationForm::None);
        let text = "Hello  world";
        assert_eq!(normalizer.normalize(text), "Hello  world");
    }

    #[test]
    fn test_escape_whitespaces() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize("  hello \t world "),
            "\u{2581}hello\u{2581}world"
        );
    }

    #[test]
    fn test_blank_line_normalizes_to_empty() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(" \t "), "");
    }

    #[test]
    fn test_without_dummy_prefix() {
        let normalizer = Normalizer::new(NormalizerConfig {
            add_dummy_prefix: false,
            ..Default::default()
        });
        assert_eq!(normalizer.normalize("a b"), "a\u{2581}b");
    }

    #[test]
    fn test_denormalize() {
        let normalizer = Normalizer::default();
        let normalized = normalizer.normalize("hello world");
        assert_eq!(normalizer.denormalize(&normalized), "hello world");
    }
}
