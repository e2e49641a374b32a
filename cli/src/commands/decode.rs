//! Decode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained `.model` file
    #[arg(short, long)]
    pub model: PathBuf,

    /// Piece IDs to decode (comma-separated)
    #[arg(short, long)]
    pub ids: String,
}

use anyhow::{Context, Result as AnyhowResult};
use wordvocab_tokenizer::Tokenizer;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.model)?;

    let ids: Vec<u32> = cmd
        .ids
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid piece ID {:?}", s))
        })
        .collect::<AnyhowResult<Vec<_>>>()?;

    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}
