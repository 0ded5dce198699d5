//! Generation errors.

use thiserror::Error;

use super::charset::CharClass;

/// A pool a request draws from has nothing left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyPoolError {
    /// A requested character class lost every character to filtering.
    #[error("character set is empty: no usable {0} characters")]
    Class(CharClass),

    /// The passphrase vocabulary has no words.
    #[error("word list is empty")]
    Words,
}
