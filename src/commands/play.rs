//! Interactive terminal play
//!
//! Reads guesses line by line and renders each turn. Generic over the input
//! and output streams so the loop can be driven from tests.

use crate::error::Error;
use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::output::{lose_taunt, render_guess, render_stats, win_exclamation};
use crate::stats::PlayerStats;
use crate::wordlists::WordStore;
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

/// Settings for a play session
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Play against this word instead of a random one
    pub secret: Option<String>,
    /// Use colored tiles instead of `!~x` codes
    pub colorful: bool,
}

/// Run the play loop until the player stops or input runs out
///
/// With a random secret, the player is offered another game after each one.
/// Returns the statistics of the session.
///
/// # Errors
///
/// Returns an error if the store is empty, the requested secret is not in the
/// store, or reading input / writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    store: &mut WordStore,
    options: &PlayOptions,
    mut input: R,
    mut out: W,
) -> Result<PlayerStats> {
    let mut stats = PlayerStats::new(MAX_GUESSES);
    // A blank secret means a random one
    let requested = options
        .secret
        .as_deref()
        .map(str::trim)
        .filter(|secret| !secret.is_empty());

    loop {
        let secret = match requested {
            Some(secret) => secret.to_string(),
            None => store
                .random_word()
                .map(str::to_string)
                .context("The word list is empty")?,
        };
        // Drawn up front from the store's generator so seeded runs repeat
        let taunt = lose_taunt(store.rng_mut());
        let mut game = Game::new(store, &secret)?;

        stats.attempt();
        let status = play_game(&mut game, options.colorful, taunt, &mut input, &mut out)?;
        info!("Game over: {status:?} against '{}'", game.secret());

        let highlight = match status {
            GameStatus::Won { guesses } => {
                stats.win(guesses);
                Some(guesses)
            }
            GameStatus::Lost => {
                stats.lose();
                None
            }
            // Input ran out mid-game
            GameStatus::InProgress => return Ok(stats),
        };

        write!(out, "\n{}", render_stats(&stats, options.colorful, highlight))?;

        if requested.is_some() || !play_again(&mut input, &mut out)? {
            return Ok(stats);
        }
        writeln!(out)?;
    }
}

/// Play one game, returning how it ended
fn play_game<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    colorful: bool,
    taunt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<GameStatus> {
    loop {
        let Some(line) = prompt(input, out, &game.guess_number().to_string())? else {
            return Ok(game.status());
        };
        if line.is_empty() {
            continue;
        }

        let turn = match game.submit(&line) {
            Ok(turn) => turn,
            Err(Error::NotAWord(_)) => {
                writeln!(out, "Not a word")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        write!(
            out,
            "{}",
            render_guess(&turn.guess, &turn.feedback, game.letters(), colorful)
        )?;

        match turn.status {
            GameStatus::Won { guesses } => {
                writeln!(out, "{}", win_exclamation(guesses))?;
                return Ok(turn.status);
            }
            GameStatus::Lost => {
                writeln!(out, "{taunt}")?;
                writeln!(out, "The word was: {}", game.secret())?;
                return Ok(turn.status);
            }
            GameStatus::InProgress => {}
        }
    }
}

fn play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    let answer = prompt(input, out, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("yes" | "y")
    ))
}

/// Print `label: ` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("Failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
