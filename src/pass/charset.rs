//! Character pools for password generation.

use std::collections::HashSet;
use std::fmt;

use super::EmptyPoolError;
use crate::settings::Settings;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/";

/// Characters easily misread as one another.
pub const AMBIGUOUS: &[char] = &['l', 'I', '1', 'O', '0', 'o'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    fn table(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Symbols are never filtered for ambiguity.
    fn filters_ambiguous(self) -> bool {
        !matches!(self, CharClass::Symbol)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Candidate characters for one enabled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub class: CharClass,
    pub chars: Vec<char>,
}

impl Pool {
    fn new(class: CharClass, avoid: Option<&[char]>) -> Self {
        let chars = class
            .table()
            .chars()
            .filter(|c| match avoid {
                Some(set) if class.filters_ambiguous() => !set.contains(c),
                _ => true,
            })
            .collect();
        Pool { class, chars }
    }
}

/// Build one pool per enabled class: lowercase always, then uppercase,
/// digits and symbols as requested.
///
/// Every pool is checked before any sampling happens; a class left with no
/// characters after filtering fails the whole build.
pub fn build(settings: &Settings, ambiguous: &[char]) -> Result<Vec<Pool>, EmptyPoolError> {
    let avoid = settings.avoid_ambiguous.then_some(ambiguous);

    let mut classes = vec![CharClass::Lowercase];
    if settings.upper {
        classes.push(CharClass::Uppercase);
    }
    if settings.digits {
        classes.push(CharClass::Digit);
    }
    if settings.symbols {
        classes.push(CharClass::Symbol);
    }

    classes
        .into_iter()
        .map(|class| {
            let pool = Pool::new(class, avoid);
            if pool.chars.is_empty() {
                Err(EmptyPoolError::Class(class))
            } else {
                Ok(pool)
            }
        })
        .collect()
}

/// Union of all pools without duplicates, in first-seen order.
pub fn combine(pools: &[Pool]) -> Vec<char> {
    let mut seen = HashSet::new();
    pools
        .iter()
        .flat_map(|pool| pool.chars.iter().copied())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Size of the sampling alphabet for the given settings.
pub fn size(settings: &Settings, ambiguous: &[char]) -> Result<usize, EmptyPoolError> {
    build(settings, ambiguous).map(|pools| combine(&pools).len())
}
