//! Mordle - CLI
//!
//! Play a word-guessing game in the terminal, or list the words that are
//! still possible given some hints.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::debug;
use mordle::{
    commands::{PlayOptions, run_list, run_play},
    logging,
    wordlists::{
        WordStore,
        loader::{load_default, load_from_file},
    },
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mordle",
    about = "Terminal word-guessing game and solution finder",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long)]
    word_file: Option<PathBuf>,

    /// Play against this word instead of a random one
    #[arg(short, long)]
    secret_word: Option<String>,

    /// List words consistent with the hints instead of playing
    #[arg(short, long)]
    list: bool,

    /// A previous guess and its feedback ('!' matched, '~' misplaced, 'x' absent); implies --list
    #[arg(
        long,
        num_args = 2,
        value_names = ["GUESS", "FEEDBACK"],
        action = ArgAction::Append
    )]
    hint: Vec<String>,

    /// Plain output: no colors, feedback shown as '!~x' codes
    #[arg(long)]
    no_color: bool,

    /// Seed for picking the secret word
    #[arg(long)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Hints as (guess, feedback) pairs
    fn hint_pairs(&self) -> Vec<(String, String)> {
        self.hint
            .chunks(2)
            .filter_map(|pair| match pair {
                [guess, feedback] => Some((guess.clone(), feedback.clone())),
                _ => None,
            })
            .collect()
    }
}

/// Load the word list selected by `--word-file`
fn load_store(word_file: Option<&PathBuf>) -> Result<WordStore> {
    let store = match word_file {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?,
        None => load_default().context("Failed to load the built-in word list")?,
    };

    if store.count() == 0 {
        bail!("The word list contains no words");
    }
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut store = load_store(cli.word_file.as_ref())?;
    if let Some(seed) = cli.seed {
        debug!("Seeding word selection with {seed}");
        store = store.with_seed(seed);
    }

    // Any --hint implies --list
    if cli.list || !cli.hint.is_empty() {
        run_list(&store, &cli.hint_pairs(), io::stdout().lock())?;
        return Ok(());
    }

    let options = PlayOptions {
        secret: cli.secret_word.clone(),
        colorful: !cli.no_color,
    };
    run_play(&mut store, &options, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
