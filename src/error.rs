//! Error type shared by the word store, the hint filter and the game
//!
//! Every operation validates its input eagerly and fails closed with one of
//! these variants. None of them is fatal to the process; the caller decides
//! whether to retry, prompt again or exit.

use std::fmt;

/// Failures reported by the game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word list could not be read or its words differ in length
    InvalidWordList(String),
    /// A (guess, feedback) pair has the wrong length or an unknown feedback code
    InvalidHint { guess: String, feedback: String },
    /// A guess (or requested secret) is not in the word list
    NotAWord(String),
    /// A guess was submitted after the game already ended
    GameOver,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordList(reason) => write!(f, "Invalid word list: {reason}"),
            Self::InvalidHint { guess, feedback } => {
                write!(f, "Invalid hint: {guess} {feedback}")
            }
            Self::NotAWord(word) => write!(f, "Not a word: {word}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for Error {}
