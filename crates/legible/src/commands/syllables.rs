//! Syllables command: per-word syllable counts.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use legible_core::{syllables, text};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words (or phrases) to split into words and count.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables<'a> {
    word: &'a str,
    syllables: usize,
}

/// Print the heuristic syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");

    let counts: Vec<WordSyllables<'_>> = args
        .words
        .iter()
        .flat_map(|arg| text::split_words(arg))
        .map(|word| WordSyllables {
            word,
            syllables: syllables::count_syllables(word),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for entry in &counts {
            println!("{}: {}", entry.word.bold(), entry.syllables);
        }
    }

    Ok(())
}
