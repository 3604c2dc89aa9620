//! Solution finder
//!
//! Lists every word that is still a possible secret given a set of hints.

use crate::wordlists::WordStore;
use anyhow::Result;
use std::io::Write;

/// Printed when no word survives the hints
pub const NO_MATCHES: &str = "<No words matched>";

/// Print the words consistent with every `(guess, feedback)` hint
///
/// All hints are validated before any filtering, so a malformed one produces
/// no output at all. Returns the number of words printed.
///
/// # Errors
///
/// Returns an `InvalidHint` error naming the first malformed pair, or an I/O
/// error if writing fails.
pub fn run_list<G, F, W>(store: &WordStore, hints: &[(G, F)], mut out: W) -> Result<usize>
where
    G: AsRef<str>,
    F: AsRef<str>,
    W: Write,
{
    let hints = store.parse_hints(hints)?;
    let survivors = store.filter(&hints)?;

    if survivors.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
    }
    for word in &survivors {
        writeln!(out, "{word}")?;
    }

    Ok(survivors.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn store() -> WordStore {
        WordStore::load(["arise", "route", "rules", "rebus"]).unwrap()
    }

    fn list(hints: &[(&str, &str)]) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = run_list(&store(), hints, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn no_hints_lists_all_words_sorted() {
        let (count, out) = list(&[]);
        assert_eq!(count.unwrap(), 4);
        assert_eq!(out, "arise\nrebus\nroute\nrules\n");
    }

    #[test]
    fn hints_narrow_to_rebus() {
        let (count, out) = list(&[("arise", "x~x~~"), ("route", "!x~x~"), ("rules", "!~x~!")]);
        assert_eq!(count.unwrap(), 1);
        assert_eq!(out, "rebus\n");
    }

    #[test]
    fn nothing_matched_is_reported() {
        let (count, out) = list(&[("arise", "!!!!!"), ("rebus", "!!!!!")]);
        assert_eq!(count.unwrap(), 0);
        assert_eq!(out, format!("{NO_MATCHES}\n"));
    }

    #[test]
    fn invalid_hint_aborts_without_output() {
        let (result, out) = list(&[("arise", "x~x~~"), ("route", "!x?x~")]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidHint { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn uppercase_guess_is_accepted() {
        let (count, _) = list(&[("ARISE", "x~x~~")]);
        assert_eq!(count.unwrap(), 2);
    }
}
