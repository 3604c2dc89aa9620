//! Guess evaluation and the per-letter result codes
//!
//! Feedback is kept as a sequence of [`ResultCode`] values inside the engine.
//! At the boundary (hint input, plain-text display) each code is written as a
//! single character:
//! - `!` = matched (letter is in the correct spot)
//! - `~` = misplaced (letter is in the word, but elsewhere)
//! - `x` = absent (letter is not in the word)

use std::fmt;
use std::str::FromStr;

/// Classification of one letter of a guess
///
/// Variants are ordered by how much they reveal, so `Matched` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultCode {
    /// Placeholder used while a guess is being evaluated; never part of a result
    Unprocessed,
    /// Letter does not appear in the secret (or every occurrence is already claimed)
    Absent,
    /// Letter appears in the secret, but not at this position
    Misplaced,
    /// Letter is at this exact position in the secret
    Matched,
}

impl ResultCode {
    /// Boundary character for this code
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Matched => '!',
            Self::Misplaced => '~',
            Self::Absent => 'x',
            Self::Unprocessed => ' ',
        }
    }
}

impl TryFrom<char> for ResultCode {
    type Error = char;

    /// Parse a boundary character; the unprocessed placeholder is never accepted
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '!' => Ok(Self::Matched),
            '~' => Ok(Self::Misplaced),
            'x' => Ok(Self::Absent),
            other => Err(other),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of comparing a guess with the secret, one code per guess letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<ResultCode>);

impl Feedback {
    /// Wrap a sequence of codes
    #[must_use]
    pub const fn new(codes: Vec<ResultCode>) -> Self {
        Self(codes)
    }

    /// The codes, positionally aligned with the guess
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[ResultCode] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter matched
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&code| code == ResultCode::Matched)
    }

    /// Number of positions carrying `code`
    #[must_use]
    pub fn count(&self, code: ResultCode) -> usize {
        self.0.iter().filter(|&&c| c == code).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a feedback string such as `"!~xx!"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| {
                ResultCode::try_from(ch).map_err(|bad| format!("Invalid feedback code: {bad:?}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Compute the feedback for `guess` against `secret`
///
/// Both words must have the same length; the game only evaluates guesses that
/// are in the word list, which guarantees it.
///
/// # Algorithm
/// 1. First pass: every position where the letters are equal is `Matched`.
/// 2. Second pass: for each remaining position, scan the secret left to right
///    for the guess letter, skipping occurrences whose position was claimed by
///    an exact match. The first unclaimed occurrence makes the letter
///    `Misplaced`; running off the end makes it `Absent`.
///
/// # Examples
/// ```
/// use mordle::core::evaluate;
///
/// assert_eq!(evaluate("rebus", "arise").to_string(), "x~x~~");
/// assert_eq!(evaluate("rebus", "route").to_string(), "!x~x~");
/// ```
#[must_use]
pub fn evaluate(secret: &str, guess: &str) -> Feedback {
    debug_assert_eq!(
        secret.len(),
        guess.len(),
        "secret and guess must have the same length"
    );

    let secret = secret.as_bytes();
    let guess = guess.as_bytes();

    // First pass: exact matches
    let mut codes: Vec<ResultCode> = guess
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            if secret.get(i) == Some(letter) {
                ResultCode::Matched
            } else {
                ResultCode::Unprocessed
            }
        })
        .collect();

    // Second pass: misplaced or absent
    // Allow: the code of guess position i depends on codes at other positions
    #[allow(clippy::needless_range_loop)]
    for i in 0..guess.len() {
        if codes[i] != ResultCode::Unprocessed {
            continue;
        }

        let letter = guess[i];
        let mut offset = 0;
        let code = loop {
            let Some(found) = secret[offset..].iter().position(|&c| c == letter) else {
                break ResultCode::Absent;
            };
            let position = offset + found;

            // An occurrence already claimed by an exact match doesn't count
            if codes.get(position) != Some(&ResultCode::Matched) {
                break ResultCode::Misplaced;
            }
            offset = position + 1;
        };
        codes[i] = code;
    }

    Feedback::new(codes)
}
