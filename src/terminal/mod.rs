//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, tty checks and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
