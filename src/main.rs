//! Wordle Game - CLI
//!
//! Play Wordle in the terminal: 4, 5, or 6 letter words, a configurable try
//! budget, and optional timed sessions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use wordle_game::{
    commands::run_play,
    session::SessionConfig,
    wordlists::{WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game with timed sessions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 4, 5, or 6 with the built-in lists
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value = "6")]
    tries: usize,

    /// Time limit in seconds (untimed if omitted)
    #[arg(short = 'T', long, global = true)]
    time_limit: Option<u64>,

    /// Wordlist: 'builtin' (default) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// List the available word lengths and dictionary sizes
    Words,
}

/// Load the word source based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<WordSource> {
    match wordlist_mode {
        "builtin" => Ok(WordSource::builtin()),
        path => {
            let words = load_from_file(path)?;
            let mut source = WordSource::empty();
            source.register(words);
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let words = Arc::new(load_words(&cli.wordlist)?);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = SessionConfig {
                word_length: cli.length,
                max_tries: cli.tries,
                time_limit: cli.time_limit.map(Duration::from_secs),
            };
            run_play(&words, &config, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Words => {
            words_command(&words);
            Ok(())
        }
    }
}

fn words_command(words: &WordSource) {
    let lengths = words.lengths();
    if lengths.is_empty() {
        println!("No words loaded");
        return;
    }

    for length in lengths {
        println!("{length} letters: {} words", words.count(length));
    }
}
