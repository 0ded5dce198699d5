//! Prompt input.
//!
//! On a terminal, answers are typed into a raw-mode line editor. When stdin is
//! piped, plain lines are read and end of input reads as a cancel.

use std::io::{self, BufRead};
use std::ops::RangeInclusive;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal, stdin_is_tty};

/// Read one answer. `None` means the user cancelled (Esc) or input ended.
pub fn read_line(prompt: &str) -> Option<String> {
    if stdin_is_tty() {
        edit_line(prompt)
    } else {
        read_piped(prompt)
    }
}

fn read_piped(prompt: &str) -> Option<String> {
    print!("{prompt}: ");
    flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            None
        }
        Ok(_) => {
            println!();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

fn edit_line(prompt: &str) -> Option<String> {
    let mut input: Vec<char> = Vec::new();
    let mut cursor = 0usize;
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            log::debug!("raw mode unavailable ({e}), reading plain line");
            return read_piped(prompt);
        }
    };

    print!("{prompt}: ");
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => {
                cancelled = true;
                break;
            }
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let shown: String = input.iter().collect();
        print!("\r{prompt}: {shown}\x1b[K");
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
    }

    drop(_guard);
    println!();
    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

// ============================================================================
// Typed prompts
// ============================================================================

/// Ask for a number in `range`, re-prompting on bad input. Empty keeps `current`.
pub fn ask_int(prompt: &str, current: usize, range: &RangeInclusive<usize>) -> Option<usize> {
    let prompt = format!("{prompt} [{current}]");
    loop {
        let answer = read_line(&prompt)?;
        match parse_int(&answer, current, range) {
            Some(value) => return Some(value),
            None => log::debug!("rejected numeric answer {answer:?}"),
        }
    }
}

/// Ask a yes/no question, re-prompting on bad input. Empty keeps `current`.
pub fn ask_yes_no(prompt: &str, current: bool) -> Option<bool> {
    let hint = if current { "Y/n" } else { "y/N" };
    let prompt = format!("{prompt} ({hint})");
    loop {
        let answer = read_line(&prompt)?;
        match parse_yes_no(&answer, current) {
            Some(value) => return Some(value),
            None => log::debug!("rejected yes/no answer {answer:?}"),
        }
    }
}

/// Ask for free text. Empty keeps `current`; anything else is taken verbatim.
pub fn ask_text(prompt: &str, current: &str) -> Option<String> {
    let answer = read_line(&format!("{prompt} [{current}]"))?;
    if answer.is_empty() {
        Some(current.to_string())
    } else {
        Some(answer)
    }
}

pub fn parse_int(answer: &str, default: usize, range: &RangeInclusive<usize>) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(default);
    }
    answer.parse().ok().filter(|v| range.contains(v))
}

pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_number_keeps_default() {
        assert_eq!(parse_int("", 12, &(4..=128)), Some(12));
        assert_eq!(parse_int("   ", 3, &(1..=50)), Some(3));
    }

    #[test]
    fn numbers_must_be_in_range() {
        let range = 4..=128;
        assert_eq!(parse_int("4", 12, &range), Some(4));
        assert_eq!(parse_int(" 128 ", 12, &range), Some(128));
        assert_eq!(parse_int("3", 12, &range), None);
        assert_eq!(parse_int("129", 12, &range), None);
    }

    #[test]
    fn non_numbers_are_rejected() {
        let range = 1..=50;
        assert_eq!(parse_int("ten", 1, &range), None);
        assert_eq!(parse_int("-5", 1, &range), None);
        assert_eq!(parse_int("2.5", 1, &range), None);
    }

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("", false), Some(false));
        assert_eq!(parse_yes_no("Y", false), Some(true));
        assert_eq!(parse_yes_no("yes", false), Some(true));
        assert_eq!(parse_yes_no(" NO ", true), Some(false));
        assert_eq!(parse_yes_no("n", true), Some(false));
        assert_eq!(parse_yes_no("maybe", true), None);
    }
}
