//! The canonical word list
//!
//! A `WordStore` holds a sorted, deduplicated list of lower-case words that
//! all share one length. It answers membership queries, picks random secrets
//! and runs the solution finder over its words.

use crate::core::{Hint, filter_candidates};
use crate::error::Error;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Sorted set of same-length words with its own random generator
pub struct WordStore {
    words: Vec<String>,
    word_length: usize,
    rng: StdRng,
}

impl WordStore {
    /// Build a store from raw lines
    ///
    /// Each line is trimmed and lower-cased; blank lines are skipped. The
    /// generator is seeded from the operating system.
    ///
    /// Lower-casing is ASCII-only: non-ASCII capitals are kept as they are, and
    /// word length is counted in bytes.
    ///
    /// # Errors
    /// Returns `Error::InvalidWordList` naming the first word whose length
    /// differs from the first non-blank line.
    ///
    /// # Examples
    /// ```
    /// use mordle::wordlists::WordStore;
    ///
    /// let store = WordStore::load(["Route", "arise", "", "  rebus "]).unwrap();
    /// assert_eq!(store.count(), 3);
    /// assert_eq!(store.word_length(), 5);
    /// assert!(store.contains("route"));
    ///
    /// assert!(WordStore::load(["cat", "dog", "mouse"]).is_err());
    /// ```
    pub fn load<I, S>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut word_length = 0;

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }

            if word_length == 0 {
                word_length = word.len();
            }
            if word.len() != word_length {
                warn!("Rejecting word list: '{word}' is not {word_length} letters long");
                return Err(Error::InvalidWordList(format!(
                    "Inconsistent word length: {word}"
                )));
            }

            words.push(word.to_ascii_lowercase());
        }

        // Sorted once so membership is a binary search
        words.sort_unstable();
        words.dedup();

        info!("Loaded {} words of length {word_length}", words.len());

        Ok(Self {
            words,
            word_length,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replace the generator with one seeded from `seed`
    ///
    /// Two stores with the same words and seed pick the same sequence of words.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Check if `word` is in the list
    ///
    /// Words of the wrong length are simply not found.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.len() == self.word_length
            && self
                .words
                .binary_search_by(|w| w.as_str().cmp(word))
                .is_ok()
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the store is empty.
    pub fn random_word(&mut self) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.words.len());
        Some(&self.words[index])
    }

    /// The store's generator, for other random choices made during play
    ///
    /// Shares the seed given to [`WordStore::with_seed`].
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Number of words in the list
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Length shared by every word, 0 for an empty list
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words in ascending order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Validate boundary hints against this list's word length
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` for the first malformed pair; nothing is
    /// returned for the others.
    pub fn parse_hints<G, F>(&self, pairs: &[(G, F)]) -> Result<Vec<Hint>, Error>
    where
        G: AsRef<str>,
        F: AsRef<str>,
    {
        pairs
            .iter()
            .map(|(guess, feedback)| {
                Hint::parse(guess.as_ref(), feedback.as_ref(), self.word_length)
            })
            .collect()
    }

    /// Words consistent with every hint, in sorted order
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` if any hint's length differs from the word
    /// length; no partial result is produced.
    pub fn filter(&self, hints: &[Hint]) -> Result<Vec<&str>, Error> {
        if let Some(bad) = hints.iter().find(|h| h.guess().len() != self.word_length) {
            return Err(Error::InvalidHint {
                guess: bad.guess().to_string(),
                feedback: bad.feedback().to_string(),
            });
        }

        let survivors = filter_candidates(&self.words, hints);
        debug!(
            "{} of {} words survive {} hint(s)",
            survivors.len(),
            self.words.len(),
            hints.len()
        );
        Ok(survivors)
    }
}

impl fmt::Debug for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStore")
            .field("count", &self.words.len())
            .field("word_length", &self.word_length)
            .finish_non_exhaustive()
    }
}
