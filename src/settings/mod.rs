//! Generation settings.
//!
//! A `Settings` value is never edited in place: the menu builds a new one
//! from the answers to its prompts and swaps it in once they are complete.

use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Password,
    Passphrase,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Password => f.write_str("character password"),
            Mode::Passphrase => f.write_str("passphrase"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub length: usize,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub avoid_ambiguous: bool,
    pub words: usize,
    pub separator: String,
    pub count: usize,
}

impl Settings {
    pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=128;
    pub const WORDS_RANGE: RangeInclusive<usize> = 2..=12;
    pub const COUNT_RANGE: RangeInclusive<usize> = 1..=50;

    /// Label/value rows for display.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("mode", self.mode.to_string()),
            ("length", self.length.to_string()),
            ("upper", yes_no(self.upper)),
            ("digits", yes_no(self.digits)),
            ("symbols", yes_no(self.symbols)),
            ("avoid ambiguous", yes_no(self.avoid_ambiguous)),
            ("words", self.words.to_string()),
            ("separator", format!("{:?}", self.separator)),
            ("number", self.count.to_string()),
        ]
    }
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "yes" } else { "no" })
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Password,
            length: 12,
            upper: true,
            digits: true,
            symbols: false,
            avoid_ambiguous: false,
            words: 4,
            separator: String::from("-"),
            count: 1,
        }
    }
}
