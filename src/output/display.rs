//! Game messages and the statistics report

use super::formatters::{COLOR_ABSENT, COLOR_MATCHED, histogram_bar};
use crate::stats::PlayerStats;
use colored::Colorize;
use rand::Rng;
use std::fmt::Write;

/// Width of the longest distribution bar
const MAX_BAR_WIDTH: usize = 50;

/// Width of the report labels
const LABEL_WIDTH: usize = 15;

/// What to say after a win in `guesses` guesses
#[must_use]
pub const fn win_exclamation(guesses: usize) -> &'static str {
    match guesses {
        1 => "Genius!",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        6 => "Phew",
        _ => "Meh",
    }
}

const TAUNTS: &[&str] = &[
    "Wow, that was embarrassing.",
    "At least your head can serve as a hat rack.",
    "Were you dropped on your head as a child?",
    "Stupid is as stupid does.",
    "Don't quit your day job.",
    "You are terrible at this.",
    "Sorry, you suck.",
];

/// What to say after a loss
///
/// Most of the time this is a plain "You lose."; now and then it's a taunt.
pub fn lose_taunt<R: Rng>(rng: &mut R) -> &'static str {
    TAUNTS
        .get(rng.random_range(0..26))
        .copied()
        .unwrap_or("You lose.")
}

/// Render the statistics report
///
/// `highlight` is the guess count of the game just won; its bar is drawn in
/// green.
#[must_use]
pub fn render_stats(stats: &PlayerStats, colorful: bool, highlight: Option<usize>) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{:<LABEL_WIDTH$} {}", "Played:", stats.played());
    if stats.played() == 0 {
        return out;
    }

    let _ = writeln!(out, "{:<LABEL_WIDTH$} {}", "Win %:", stats.win_percentage());
    let last_win = stats.last_win().map_or_else(
        || "Never. So sad.".to_string(),
        |when| when.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    let _ = writeln!(out, "{:<LABEL_WIDTH$} {last_win}", "Last win:");
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {}",
        "Current Streak:",
        stats.current_streak()
    );
    let _ = writeln!(out, "{:<LABEL_WIDTH$} {}", "Max Streak:", stats.max_streak());
    let _ = writeln!(out, "Guess distribution:");

    // Bars scale to the largest bucket
    let max_item = stats.distribution().iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.distribution().iter().enumerate() {
        let guesses = index + 1;
        let width = if max_item == 0 {
            0
        } else {
            ((count as f64 / max_item as f64) * MAX_BAR_WIDTH as f64) as usize
        };
        let bar = histogram_bar(&count.to_string(), width);

        if colorful {
            let color = if highlight == Some(guesses) {
                COLOR_MATCHED
            } else {
                COLOR_ABSENT
            };
            let _ = writeln!(out, "{guesses} {}", bar.white().on_color(color));
        } else {
            let _ = writeln!(out, "{guesses} {bar}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn exclamations_by_guess_count() {
        assert_eq!(win_exclamation(1), "Genius!");
        assert_eq!(win_exclamation(6), "Phew");
        assert_eq!(win_exclamation(9), "Meh");
    }

    #[test]
    fn taunts_are_known_messages() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let taunt = lose_taunt(&mut rng);
            assert!(taunt == "You lose." || TAUNTS.contains(&taunt));
        }
    }

    #[test]
    fn report_with_no_games_is_one_line() {
        let stats = PlayerStats::new(6);
        assert_eq!(render_stats(&stats, false, None), "Played:         0\n");
    }

    #[test]
    fn plain_report_scales_bars() {
        let mut stats = PlayerStats::new(3);
        stats.attempt();
        stats.win(2);
        stats.attempt();
        stats.lose();

        let report = render_stats(&stats, false, Some(2));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Played:         2");
        assert_eq!(lines[1], "Win %:          50");
        assert!(lines[2].starts_with("Last win:"));
        assert_eq!(lines[3], "Current Streak: 0");
        assert_eq!(lines[4], "Max Streak:     1");
        assert_eq!(lines[5], "Guess distribution:");
        assert_eq!(lines[6], "1  0 ");
        assert_eq!(lines[7], format!("2 {}1 ", " ".repeat(MAX_BAR_WIDTH + 1)));
        assert_eq!(lines[8], "3  0 ");
    }

    #[test]
    fn never_won_says_so() {
        let mut stats = PlayerStats::new(6);
        stats.attempt();
        stats.lose();
        let report = render_stats(&stats, false, None);
        assert!(report.contains("Never. So sad."));
    }
}
