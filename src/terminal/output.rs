//! Terminal output: boxes, colours, screen control.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use super::stdout_is_tty;

// ============================================================================
// ANSI
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[2m";

/// Wrap `text` in `color` when stdout is a terminal.
pub fn paint(color: &str, text: &str) -> String {
    if stdout_is_tty() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

// ============================================================================
// Screen control
// ============================================================================

/// Clear screen and home the cursor. No-op when piped.
pub fn clear() {
    if stdout_is_tty() {
        print!("\x1b[2J\x1b[3J\x1b[H");
        flush();
    }
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colours.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    if stdout_is_tty() {
        print!("{RESET}");
    }
    flush();
}

pub fn print_error(msg: &str) {
    println!("{}", paint(RED, msg));
}

pub fn print_success(msg: &str) {
    println!("{}", paint(GREEN, msg));
}

// ============================================================================
// Boxes (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

/// │ content      │
pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

/// │ label:   value │
pub fn box_field(label: &str, value: &str) {
    box_line(&format!("{:<18}{}", format!("{label}:"), value));
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

fn top_line(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

fn content_line(content: &str) -> String {
    let inner = BOX_WIDTH - 4;
    let padding = inner.saturating_sub(display_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Visible width, skipping ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escape_codes() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(display_width("─ü"), 2);
    }

    #[test]
    fn lines_fill_box_width() {
        assert_eq!(top_line("Settings").chars().count(), BOX_WIDTH);
        assert_eq!(top_line("").chars().count(), BOX_WIDTH);
        assert_eq!(content_line("1) Generate").chars().count(), BOX_WIDTH);
        let colored = format!("{GREEN}ok{RESET}");
        assert_eq!(display_width(&content_line(&colored)), BOX_WIDTH);
    }

    #[test]
    fn long_content_is_not_truncated() {
        let long = "x".repeat(BOX_WIDTH * 2);
        assert!(content_line(&long).contains(&long));
    }
}
