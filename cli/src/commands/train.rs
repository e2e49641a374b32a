//! Train command implementation.

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Instant;
use wordvocab_core::{InputFormat, NormalizerConfig, TrainerConfig};
use wordvocab_tokenizer::{CorpusLoader, ModelSaver, Splitter};
use wordvocab_training::WordTrainer;

/// Train command arguments.
#[derive(Parser, Debug, Default)]
pub struct TrainCommand {
    /// Training data files, one sentence per line
    #[arg(short, long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output prefix; writes <prefix>.model and <prefix>.vocab
    #[arg(short, long)]
    pub model_prefix: Option<String>,

    /// JSON file with `trainer` and `normalizer` sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total vocabulary size, meta pieces included
    #[arg(short, long)]
    pub vocab_size: Option<usize>,

    /// Fraction of characters the model must cover
    #[arg(long)]
    pub character_coverage: Option<f64>,

    /// Maximum number of sentences to load
    #[arg(long)]
    pub input_sentence_size: Option<u64>,

    /// Comma-separated control symbols
    #[arg(long, value_delimiter = ',')]
    pub control_symbols: Vec<String>,

    /// Comma-separated user-defined symbols
    #[arg(long, value_delimiter = ',')]
    pub user_defined_symbols: Vec<String>,

    /// Input lines are `sentence<TAB>count`
    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    /// Do not prepend a space to every sentence
    #[arg(long, default_value_t = false)]
    pub no_dummy_prefix: bool,
}

/// Layout of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    trainer: TrainerConfig,
    normalizer: NormalizerConfig,
}

impl TrainCommand {
    /// Merge the config file (if any) with command-line overrides.
    fn resolve(&self) -> AnyhowResult<(TrainerConfig, NormalizerConfig)> {
        let ConfigFile {
            mut trainer,
            mut normalizer,
        } = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => ConfigFile::default(),
        };

        if !self.input.is_empty() {
            trainer.input = self.input.clone();
        }
        if let Some(prefix) = &self.model_prefix {
            trainer.model_prefix = prefix.clone();
        }
        if let Some(size) = self.vocab_size {
            trainer.vocab_size = size;
        }
        if let Some(coverage) = self.character_coverage {
            trainer.character_coverage = coverage;
        }
        if let Some(size) = self.input_sentence_size {
            trainer.input_sentence_size = size;
        }
        if !self.control_symbols.is_empty() {
            trainer.control_symbols = self.control_symbols.clone();
        }
        if !self.user_defined_symbols.is_empty() {
            trainer.user_defined_symbols = self.user_defined_symbols.clone();
        }
        if self.tsv {
            trainer.input_format = InputFormat::Tsv;
        }
        if self.no_dummy_prefix {
            normalizer.add_dummy_prefix = false;
        }

        Ok((trainer, normalizer))
    }
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let (trainer_config, normalizer_config) = cmd.resolve()?;

    println!("Training word vocabulary...");
    println!("  Input: {:?}", trainer_config.input);
    println!("  Model prefix: {}", trainer_config.model_prefix);
    println!("  Vocab size: {}", trainer_config.vocab_size);
    println!();

    let mut loader = CorpusLoader::new(&trainer_config, &normalizer_config)?;
    let saver = ModelSaver::from_config(&trainer_config)?;
    let splitter = Splitter::meta_space();
    let trainer = WordTrainer::new(trainer_config, normalizer_config);

    let start = Instant::now();
    let vocab = trainer.train_and_save(&mut loader, &splitter, &saver)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Learned words: {}", vocab.len());
    println!(
        "Final vocab size: {}",
        vocab.len() + trainer.config().meta_symbols_size()
    );
    println!("Model saved to {}", saver.model_path().display());

    Ok(())
}
