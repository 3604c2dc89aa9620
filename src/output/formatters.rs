//! Formatting utilities for terminal output

use crate::core::{Feedback, ResultCode};
use crate::game::LetterMap;
use colored::{Color, Colorize};

/// Background for letters in the correct spot (green)
pub const COLOR_MATCHED: Color = Color::TrueColor {
    r: 0x53,
    g: 0x8D,
    b: 0x4E,
};

/// Background for letters not in the word (gray)
pub const COLOR_ABSENT: Color = Color::TrueColor {
    r: 0x3A,
    g: 0x3A,
    b: 0x3C,
};

/// Background for letters in the wrong spot (yellow)
pub const COLOR_MISPLACED: Color = Color::TrueColor {
    r: 0xB5,
    g: 0x9F,
    b: 0x3B,
};

/// Spaces between a guess and the letter map
const LETTER_MAP_PAD: usize = 4;

/// Background color for a result code
#[must_use]
pub const fn code_color(code: ResultCode) -> Color {
    match code {
        ResultCode::Matched => COLOR_MATCHED,
        ResultCode::Misplaced => COLOR_MISPLACED,
        ResultCode::Absent => COLOR_ABSENT,
        ResultCode::Unprocessed => Color::White,
    }
}

/// A letter centered in a three-wide colored cell
#[must_use]
pub fn tile(letter: char, code: ResultCode) -> String {
    format!("{letter:^3}")
        .white()
        .on_color(code_color(code))
        .to_string()
}

/// Render one guess with its feedback and the letter map beside it
///
/// Colored mode is a single line of tiles. Plain mode prints the guess over
/// its `!~x` codes. In the letter map, letters known to be absent are blanked.
/// The returned text ends with a newline.
#[must_use]
pub fn render_guess(guess: &str, feedback: &Feedback, letters: &LetterMap, colorful: bool) -> String {
    let pad = " ".repeat(LETTER_MAP_PAD);

    if colorful {
        let tiles: String = guess
            .chars()
            .zip(feedback.codes())
            .map(|(letter, &code)| tile(letter, code))
            .collect();
        return format!("{tiles}{pad}{}\n", colored_letter_map(letters));
    }

    format!(
        "{guess}{pad}{}\n{feedback}{pad}{}\n",
        plain_letter_map(letters),
        letter_map_codes(letters)
    )
}

/// Alphabet with absent letters blanked, known letters colored
fn colored_letter_map(letters: &LetterMap) -> String {
    (b'a'..=b'z')
        .map(|letter| match letters.get(&letter) {
            Some(ResultCode::Absent) => " ".to_string(),
            Some(&code) => (letter as char)
                .to_string()
                .white()
                .on_color(code_color(code))
                .to_string(),
            None => (letter as char).to_string(),
        })
        .collect()
}

/// Alphabet with absent letters blanked
#[must_use]
pub fn plain_letter_map(letters: &LetterMap) -> String {
    (b'a'..=b'z')
        .map(|letter| match letters.get(&letter) {
            Some(ResultCode::Absent) => ' ',
            _ => letter as char,
        })
        .collect()
}

/// Known code under each letter of the alphabet, blank if never guessed
#[must_use]
pub fn letter_map_codes(letters: &LetterMap) -> String {
    (b'a'..=b'z')
        .map(|letter| letters.get(&letter).map_or(' ', |code| code.symbol()))
        .collect()
}

/// Create a bar of `width` spaces followed by `label`, padded by one space
#[must_use]
pub fn histogram_bar(label: &str, width: usize) -> String {
    format!("{}{label} ", " ".repeat(width + 1))
}
