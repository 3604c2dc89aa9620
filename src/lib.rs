//! Mordle
//!
//! A terminal word-guessing game and a hint-driven solution finder.
//!
//! # Quick Start
//!
//! ```rust
//! use mordle::core::evaluate;
//! use mordle::wordlists::WordStore;
//!
//! let store = WordStore::load(["arise", "route", "rules", "rebus"]).unwrap();
//!
//! // Feedback for a guess: '!' matched, '~' misplaced, 'x' absent
//! assert_eq!(evaluate("rebus", "arise").to_string(), "x~x~~");
//!
//! // Solution finder: words consistent with every hint
//! let hints = store
//!     .parse_hints(&[("arise", "x~x~~"), ("route", "!x~x~"), ("rules", "!~x~!")])
//!     .unwrap();
//! assert_eq!(store.filter(&hints).unwrap(), vec!["rebus"]);
//! ```

// Guess evaluation and hint filtering
pub mod core;

// Error type
pub mod error;

// Word lists
pub mod wordlists;

// Game session state
pub mod game;

// Player statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;

pub use error::Error;
