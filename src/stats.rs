//! Player statistics for a play session
//!
//! Counts games, wins and streaks, and keeps the distribution of the number
//! of guesses needed to win. Statistics live for the session only.

use chrono::{DateTime, Local};

/// Win/loss record and guess distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    played: u64,
    wins: u64,
    current_streak: u64,
    max_streak: u64,
    last_win: Option<DateTime<Local>>,
    /// Index N holds the number of wins in N+1 guesses
    distribution: Vec<u64>,
}

impl PlayerStats {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            current_streak: 0,
            max_streak: 0,
            last_win: None,
            distribution: vec![0; max_guesses],
        }
    }

    /// Record the start of a game
    pub fn attempt(&mut self) {
        self.played += 1;
    }

    /// Record a win in `guesses` guesses
    pub fn win(&mut self, guesses: usize) {
        self.last_win = Some(Local::now());
        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        if let Some(bucket) = guesses
            .checked_sub(1)
            .and_then(|i| self.distribution.get_mut(i))
        {
            *bucket += 1;
        }
    }

    /// Record a loss
    pub fn lose(&mut self) {
        self.current_streak = 0;
    }

    #[must_use]
    pub const fn played(&self) -> u64 {
        self.played
    }

    #[must_use]
    pub const fn wins(&self) -> u64 {
        self.wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u64 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u64 {
        self.max_streak
    }

    #[must_use]
    pub const fn last_win(&self) -> Option<DateTime<Local>> {
        self.last_win
    }

    #[must_use]
    pub fn distribution(&self) -> &[u64] {
        &self.distribution
    }

    /// Wins as a rounded percentage of games played (0 when nothing was played)
    #[must_use]
    pub fn win_percentage(&self) -> u64 {
        if self.played == 0 {
            return 0;
        }
        let ratio = self.wins as f64 / self.played as f64;
        (ratio * 100.0).round() as u64
    }
}
