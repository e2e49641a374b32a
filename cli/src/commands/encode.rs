//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained `.model` file
    #[arg(short, long)]
    pub model: PathBuf,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Add special tokens (BOS, EOS)
    #[arg(short, long, default_value_t = false)]
    pub special_tokens: bool,

    /// Print pieces instead of IDs
    #[arg(short, long, default_value_t = false)]
    pub pieces: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;
use wordvocab_tokenizer::Tokenizer;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.model)?;

    // Read input text (from stdin if "-")
    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let encoding = tokenizer.encode(&input_text, cmd.special_tokens);

    let output = if cmd.pieces {
        encoding.pieces.join(" ")
    } else {
        let ids: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
        ids.join(" ")
    };

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} pieces to {}", encoding.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
