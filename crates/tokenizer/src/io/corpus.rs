//! Corpus loading for training.
//!
//! Reads the configured input files line by line, normalizes every sentence
//! and stops once `input_sentence_size` sentences have been collected.

use crate::pre_tokenizer::Normalizer;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use wordvocab_core::{
    InputFormat, NormalizerConfig, Result, SentenceEntry, SentenceSource, TokenizerError,
    TrainerConfig,
};

/// Corpus loader - reads weighted sentences from disk.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    /// Files to read, in order
    inputs: Vec<PathBuf>,
    /// Line layout
    format: InputFormat,
    /// Sentence cap
    max_sentences: u64,
    /// Normalizer applied to every sentence
    normalizer: Normalizer,
}

impl CorpusLoader {
    /// Create a loader for the trainer's input files.
    pub fn new(trainer: &TrainerConfig, normalizer: &NormalizerConfig) -> Result<Self> {
        if trainer.input.is_empty() {
            return Err(TokenizerError::invalid_config(
                "input",
                "at least one corpus file is required",
            ));
        }
        Ok(Self {
            inputs: trainer.input.clone(),
            format: trainer.input_format,
            max_sentences: trainer.input_sentence_size,
            normalizer: Normalizer::new(normalizer.clone()),
        })
    }

    /// Read one file, appending to `out`.
    ///
    /// Returns `false` once the sentence cap is reached.
    fn read_file(&self, path: &Path, out: &mut Vec<SentenceEntry>) -> Result<bool> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;
        let reader = BufReader::new(file);
        let before = out.len();

        for (line_num, line) in reader.lines().enumerate() {
            if out.len() as u64 >= self.max_sentences {
                tracing::info!(
                    limit = self.max_sentences,
                    "Reached input_sentence_size, ignoring the rest of the corpus"
                );
                return Ok(false);
            }

            let line = line.map_err(|e| TokenizerError::io(path, e))?;
            let (text, weight) = match self.format {
                InputFormat::Text => (line.as_str(), 1),
                InputFormat::Tsv => parse_tsv_line(&line, path, line_num + 1)?,
            };

            let normalized = self.normalizer.normalize(text);
            if normalized.is_empty() {
                continue;
            }
            out.push(SentenceEntry::new(normalized, weight));
        }

        tracing::debug!(
            path = %path.display(),
            sentences = out.len() - before,
            "Loaded corpus file"
        );
        Ok(true)
    }
}

impl SentenceSource for CorpusLoader {
    fn load_sentences(&mut self) -> Result<Vec<SentenceEntry>> {
        let mut sentences = Vec::new();
        for path in &self.inputs {
            if !self.read_file(path, &mut sentences)? {
                break;
            }
        }
        Ok(sentences)
    }
}

/// Split `sentence<TAB>count`.
fn parse_tsv_line<'a>(line: &'a str, path: &Path, line_num: usize) -> Result<(&'a str, u64)> {
    let (text, count) = line.rsplit_once('\t').ok_or_else(|| {
        TokenizerError::Load(format!(
            "{}:{}: expected `sentence<TAB>count`",
            path.display(),
            line_num
        ))
    })?;
    let weight = count.trim().parse::<u64>().map_err(|e| {
        TokenizerError::Load(format!(
            "{}:{}: invalid count {:?}: {}",
            path.display(),
            line_num,
            count,
            e
        ))
    })?;
    Ok((text, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_corpus(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("wordvocab_test_corpus");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn config(inputs: &[&PathBuf], format: InputFormat) -> TrainerConfig {
        let mut builder = TrainerConfig::builder().input_format(format);
        for path in inputs {
            builder = builder.input(*path);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_text_format() {
        let path = write_corpus("text.txt", "hello world\n\n   \nhello\n");
        let mut loader =
            CorpusLoader::new(&config(&[&path], InputFormat::Text), &NormalizerConfig::default())
                .unwrap();

        let sentences = loader.load_sentences().unwrap();
        assert_eq!(
            sentences,
            vec![
                SentenceEntry::new("\u{2581}hello\u{2581}world", 1),
                SentenceEntry::new("\u{2581}hello", 1),
            ]
        );

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_tsv_format() {
        let path = write_corpus("weighted.tsv", "a b a\t3\nb c\t1\n");
        let normalizer = NormalizerConfig {
            add_dummy_prefix: false,
            ..Default::default()
        };
        let mut loader =
            CorpusLoader::new(&config(&[&path], InputFormat::Tsv), &normalizer).unwrap();

        let sentences = loader.load_sentences().unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].weight, 3);
        assert_eq!(sentences[1], SentenceEntry::new("b\u{2581}c", 1));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_tsv_bad_count() {
        let path = write_corpus("bad.tsv", "fine\t2\nbroken\tmany\n");
        let mut loader = CorpusLoader::new(
            &config(&[&path], InputFormat::Tsv),
            &NormalizerConfig::default(),
        )
        .unwrap();

        let err = loader.load_sentences().unwrap_err();
        assert!(matches!(err, TokenizerError::Load(ref msg) if msg.contains(":2:")));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_sentence_cap_spans_files() {
        let lines: String = (0..80).map(|i| format!("line {i}\n")).collect();
        let first = write_corpus("cap_first.txt", &lines);
        let second = write_corpus("cap_second.txt", &lines);

        let mut trainer = config(&[&first, &second], InputFormat::Text);
        trainer.input_sentence_size = 100;
        let mut loader = CorpusLoader::new(&trainer, &NormalizerConfig::default()).unwrap();

        let sentences = loader.load_sentences().unwrap();
        assert_eq!(sentences.len(), 100);
        assert_eq!(sentences[99].text, "\u{2581}line\u{2581}19");

        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }

    #[test]
    fn test_requires_input() {
        let err = CorpusLoader::new(&TrainerConfig::default(), &NormalizerConfig::default())
            .unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig { field: "input", .. }));
    }

    #[test]
    fn test_missing_file() {
        let missing = std::env::temp_dir().join("wordvocab_test_corpus/does_not_exist.txt");
        let mut loader = CorpusLoader::new(
            &config(&[&missing], InputFormat::Text),
            &NormalizerConfig::default(),
        )
        .unwrap();
        assert!(matches!(
            loader.load_sentences(),
            Err(TokenizerError::Io { .. })
        ));
    }
}
