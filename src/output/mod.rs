//! Terminal output formatting
//!
//! Rendering of guesses, the letter map, game messages and statistics.

pub mod display;
pub mod formatters;

pub use display::{lose_taunt, render_stats, win_exclamation};
pub use formatters::render_guess;
