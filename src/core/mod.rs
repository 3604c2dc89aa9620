//! Core word-matching engine
//!
//! Guess evaluation and hint filtering. Everything here is pure and works on
//! plain lower-case words; the word list and the game loop live elsewhere.

mod feedback;
mod hint;

pub use feedback::{Feedback, ResultCode, evaluate};
pub use hint::{Hint, filter_candidates, is_consistent};
