//! Hints and candidate filtering for the solution finder
//!
//! A [`Hint`] is one recorded observation: a guess and the feedback it got.
//! Filtering keeps the words that could still be the secret given every hint.

use super::feedback::{Feedback, ResultCode, evaluate};
use crate::error::Error;

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    guess: String,
    feedback: Feedback,
}

impl Hint {
    /// Create a hint from a guess and its feedback
    ///
    /// The guess is lower-cased.
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` if the feedback length differs from the
    /// guess length or the feedback contains the unprocessed placeholder.
    pub fn new(guess: &str, feedback: Feedback) -> Result<Self, Error> {
        let guess = guess.trim().to_ascii_lowercase();

        if guess.is_empty()
            || feedback.len() != guess.len()
            || feedback.count(ResultCode::Unprocessed) > 0
        {
            return Err(Error::InvalidHint {
                guess,
                feedback: feedback.to_string(),
            });
        }

        Ok(Self { guess, feedback })
    }

    /// Parse a hint given in boundary form, e.g. `("arise", "x~x~~")`
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` naming the pair if the guess or the
    /// feedback is not `word_length` long, or the feedback has a character
    /// outside `{!, ~, x}`.
    ///
    /// # Examples
    /// ```
    /// use mordle::core::Hint;
    ///
    /// let hint = Hint::parse("arise", "x~x~~", 5).unwrap();
    /// assert!(hint.matches("rebus"));
    /// assert!(Hint::parse("arise", "x~?~~", 5).is_err());
    /// ```
    pub fn parse(guess: &str, feedback: &str, word_length: usize) -> Result<Self, Error> {
        let invalid = || Error::InvalidHint {
            guess: guess.to_string(),
            feedback: feedback.to_string(),
        };

        let guess_length = guess.trim().len();
        if guess_length != word_length || feedback.chars().count() != word_length {
            return Err(invalid());
        }

        let codes: Feedback = feedback.parse().map_err(|_| invalid())?;
        Self::new(guess, codes)
    }

    /// The hint that playing `guess` against `secret` would produce
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` if the two words differ in length.
    pub fn observe(secret: &str, guess: &str) -> Result<Self, Error> {
        if secret.len() != guess.len() {
            return Err(Error::InvalidHint {
                guess: guess.to_string(),
                feedback: String::new(),
            });
        }
        Self::new(guess, evaluate(secret, guess))
    }

    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Check whether `candidate` could still be the secret
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        is_consistent(candidate, self)
    }
}

/// Decide whether `candidate` is consistent with one recorded hint
///
/// Per hint position `i`:
/// - `Matched`: the candidate has the guess letter at `i`
/// - `Absent`: the candidate contains the guess letter nowhere
/// - `Misplaced`: the candidate does not have the letter at `i`, but has it
///   at some other position
///
/// `Absent` is deliberately strict: it does not account for a letter that the
/// same guess also got `Matched` or `Misplaced` elsewhere, so words with
/// repeated letters can be pruned even when the full evaluator would accept
/// them.
///
/// A candidate of a different length is never consistent.
#[must_use]
pub fn is_consistent(candidate: &str, hint: &Hint) -> bool {
    let word = candidate.as_bytes();
    let guess = hint.guess.as_bytes();

    if word.len() != guess.len() {
        return false;
    }

    hint.feedback
        .codes()
        .iter()
        .zip(guess)
        .enumerate()
        .all(|(i, (&code, &letter))| match code {
            ResultCode::Matched => word[i] == letter,
            ResultCode::Absent => !word.contains(&letter),
            ResultCode::Misplaced => {
                // Letter can't be in this spot, but must be in the word
                word[i] != letter
                    && word
                        .iter()
                        .enumerate()
                        .any(|(j, &c)| j != i && c == letter)
            }
            ResultCode::Unprocessed => true,
        })
}

/// Keep the words consistent with every hint, preserving their order
///
/// Stops checking a word at the first hint it fails.
#[must_use]
pub fn filter_candidates<'a, S: AsRef<str>>(words: &'a [S], hints: &[Hint]) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| hints.iter().all(|hint| is_consistent(word, hint)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["arise", "rebus", "route", "rules"];

    fn hint(guess: &str, feedback: &str) -> Hint {
        Hint::parse(guess, feedback, guess.len()).unwrap()
    }

    #[test]
    fn matched_requires_same_letter() {
        let h = hint("rzzzz", "!xxxx");
        assert!(h.matches("rebus"));
        assert!(!h.matches("arise"));
    }

    #[test]
    fn absent_rejects_any_occurrence() {
        let h = hint("arise", "xxxxx");
        assert!(!h.matches("route")); // has 'r' and 'e'
        assert!(h.matches("mound"));
    }

    #[test]
    fn absent_is_strict_about_repeated_letters() {
        // abcde vs guess aaxyz yields "!xxxx"; the second 'a' is absent and the
        // strict rule then rejects the real secret
        let h = Hint::observe("abcde", "aaxyz").unwrap();
        assert_eq!(h.feedback().to_string(), "!xxxx");
        assert!(!h.matches("abcde"));
    }

    #[test]
    fn misplaced_requires_letter_elsewhere() {
        let h = hint("zrzzz", "x~xxx");
        assert!(h.matches("route"));
        // 'r' in the same spot is not misplaced
        assert!(!h.matches("crown"));
        // no 'r' at all
        assert!(!h.matches("mound"));
    }

    #[test]
    fn rebus_scenario_filters_to_one() {
        let hints = vec![
            hint("arise", "x~x~~"),
            hint("route", "!x~x~"),
            hint("rules", "!~x~!"),
        ];
        assert_eq!(filter_candidates(WORDS, &hints), vec!["rebus"]);
    }

    #[test]
    fn no_hints_keeps_everything() {
        assert_eq!(filter_candidates(WORDS, &[]), WORDS.to_vec());
    }

    #[test]
    fn additional_hints_never_widen() {
        let all = [
            hint("arise", "x~x~~"),
            hint("route", "!x~x~"),
            hint("rules", "!~x~!"),
        ];
        let mut previous = WORDS.len();
        for n in 0..=all.len() {
            let survivors = filter_candidates(WORDS, &all[..n]).len();
            assert!(survivors <= previous);
            previous = survivors;
        }
    }

    #[test]
    fn observed_hint_keeps_secret_without_repeats() {
        for secret in WORDS {
            for guess in WORDS {
                let h = Hint::observe(secret, guess).unwrap();
                assert!(h.matches(secret), "{guess} vs {secret} dropped the secret");
            }
        }
    }

    #[test]
    fn parse_rejects_bad_pairs() {
        assert!(matches!(
            Hint::parse("arise", "x~?~~", 5),
            Err(Error::InvalidHint { .. })
        ));
        assert!(Hint::parse("arise", "x~x~", 5).is_err());
        assert!(Hint::parse("aris", "x~x~", 5).is_err());
        assert!(Hint::parse("arise", "x~x~~", 4).is_err());
        assert!(Hint::parse("arise", "x~x~ ", 5).is_err());
    }

    #[test]
    fn parse_lowercases_guess() {
        let h = Hint::parse("ARISE", "x~x~~", 5).unwrap();
        assert_eq!(h.guess(), "arise");
    }

    #[test]
    fn wrong_length_candidate_is_inconsistent() {
        let h = hint("arise", "xxxxx");
        assert!(!h.matches("moldy!"));
        assert!(!h.matches("mold"));
    }

    #[test]
    fn observe_rejects_mismatched_lengths() {
        assert!(Hint::observe("rebus", "rub").is_err());
    }
}
