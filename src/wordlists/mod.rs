//! Word lists
//!
//! The [`WordStore`] plus the ways to fill it: a word file, or the list
//! embedded into the binary.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use store::WordStore;
