//! One game against a secret word
//!
//! Tracks the guesses made so far, what is known about each letter, and
//! whether the game is won or lost. No I/O happens here; the play command
//! reads input and renders the turns.

use crate::core::{Feedback, ResultCode, evaluate};
use crate::error::Error;
use crate::wordlists::WordStore;
use log::debug;
use rustc_hash::FxHashMap;

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Best known result per letter, keyed by the lower-case ASCII byte
pub type LetterMap = FxHashMap<u8, ResultCode>;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Solved on guess number `guesses`
    Won { guesses: usize },
    Lost,
}

/// Outcome of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// A single game session
#[derive(Debug)]
pub struct Game<'a> {
    store: &'a WordStore,
    secret: String,
    history: Vec<(String, Feedback)>,
    letters: LetterMap,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game against `secret`
    ///
    /// # Errors
    /// Returns `Error::NotAWord` if the secret is not in the store.
    pub fn new(store: &'a WordStore, secret: &str) -> Result<Self, Error> {
        let secret = secret.trim().to_ascii_lowercase();
        if !store.contains(&secret) {
            return Err(Error::NotAWord(secret));
        }

        Ok(Self {
            store,
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            letters: LetterMap::default(),
            status: GameStatus::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// The input is trimmed and lower-cased. A word that is not in the store is
    /// rejected without using up a guess.
    ///
    /// # Errors
    /// Returns `Error::NotAWord` for unknown words and `Error::GameOver` once the
    /// game is won or lost.
    pub fn submit(&mut self, input: &str) -> Result<Turn, Error> {
        if self.status != GameStatus::InProgress {
            return Err(Error::GameOver);
        }

        let guess = input.trim().to_ascii_lowercase();
        if !self.store.contains(&guess) {
            return Err(Error::NotAWord(guess));
        }

        let feedback = evaluate(&self.secret, &guess);
        debug!("Guess {} '{guess}' -> {feedback}", self.guess_number());

        for (&letter, &code) in guess.as_bytes().iter().zip(feedback.codes()) {
            let known = self.letters.entry(letter).or_insert(code);
            *known = (*known).max(code);
        }

        self.history.push((guess.clone(), feedback.clone()));

        self.status = if feedback.is_solved() {
            GameStatus::Won {
                guesses: self.history.len(),
            }
        } else if self.history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(Turn {
            guess,
            feedback,
            status: self.status,
        })
    }

    /// The 1-based number of the next guess
    #[inline]
    #[must_use]
    pub fn guess_number(&self) -> usize {
        self.history.len() + 1
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses and their feedback, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(String, Feedback)] {
        &self.history
    }

    /// What has been learned about each guessed letter
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMap {
        &self.letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        WordStore::load([
            "arise", "route", "rules", "rebus", "crane", "slate", "moldy", "irate",
        ])
        .unwrap()
        .with_seed(1)
    }

    #[test]
    fn secret_must_be_a_word() {
        let store = store();
        assert!(matches!(
            Game::new(&store, "zzzzz"),
            Err(Error::NotAWord(_))
        ));
        assert_eq!(Game::new(&store, " REBUS ").unwrap().secret(), "rebus");
    }

    #[test]
    fn unknown_guess_does_not_use_a_turn() {
        let store = store();
        let mut game = Game::new(&store, "rebus").unwrap();

        assert_eq!(
            game.submit("qwert"),
            Err(Error::NotAWord("qwert".to_string()))
        );
        assert_eq!(game.guess_number(), 1);
        assert!(game.history().is_empty());
    }

    #[test]
    fn winning_guess_ends_game() {
        let store = store();
        let mut game = Game::new(&store, "rebus").unwrap();

        let turn = game.submit("arise").unwrap();
        assert_eq!(turn.feedback.to_string(), "x~x~~");
        assert_eq!(turn.status, GameStatus::InProgress);

        let turn = game.submit("Rebus").unwrap();
        assert!(turn.feedback.is_solved());
        assert_eq!(turn.status, GameStatus::Won { guesses: 2 });
        assert_eq!(game.submit("route"), Err(Error::GameOver));
    }

    #[test]
    fn six_misses_lose() {
        let store = store();
        let mut game = Game::new(&store, "rebus").unwrap();

        for _ in 0..MAX_GUESSES - 1 {
            assert_eq!(game.submit("moldy").unwrap().status, GameStatus::InProgress);
        }
        assert_eq!(game.submit("crane").unwrap().status, GameStatus::Lost);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn letter_map_keeps_best_result() {
        let store = store();
        let mut game = Game::new(&store, "rebus").unwrap();

        game.submit("arise").unwrap();
        assert_eq!(game.letters().get(&b'a'), Some(&ResultCode::Absent));
        assert_eq!(game.letters().get(&b'r'), Some(&ResultCode::Misplaced));

        game.submit("route").unwrap();
        assert_eq!(game.letters().get(&b'r'), Some(&ResultCode::Matched));

        // 'r' misplaced again later must not downgrade it
        game.submit("arise").unwrap();
        assert_eq!(game.letters().get(&b'r'), Some(&ResultCode::Matched));
        assert_eq!(game.letters().get(&b'z'), None);
    }
}
