//! Word list loading utilities
//!
//! Builds a [`WordStore`] from a file or from the embedded default list.

use super::WordStore;
use super::embedded::DEFAULT_WORDS;
use crate::error::Error;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a store from a file with one word per line
///
/// # Errors
///
/// Returns `Error::InvalidWordList` if the file cannot be read or its words
/// differ in length.
///
/// # Examples
/// ```no_run
/// use mordle::wordlists::loader::load_from_file;
///
/// let store = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", store.count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, Error> {
    let path = path.as_ref();
    debug!("Reading word list from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        Error::InvalidWordList(format!("Failed to open word file {}: {e}", path.display()))
    })?;

    WordStore::load(content.lines())
}

/// Load the built-in word list
///
/// # Errors
///
/// Returns `Error::InvalidWordList` only if the embedded list is malformed.
pub fn load_default() -> Result<WordStore, Error> {
    WordStore::load(DEFAULT_WORDS.iter().copied())
}
