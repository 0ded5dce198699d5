//! Menu screens and result printing.

use crate::csprng;
use crate::pass::{GeneratedSecret, Generator, entropy};
use crate::settings::{Mode, Settings};
use crate::terminal::{
    DIM, box_bottom, box_field, box_line, box_top, flush, paint, print_error,
};

pub fn enter_prompt() -> &'static str {
    "Choose (1-5, Enter generates)"
}

pub fn print_main_menu() {
    println!();
    box_top("Password Generator");
    box_line("  1) Generate");
    box_line("  2) Change settings");
    box_line("  3) Show settings");
    box_line("  4) Show last result");
    box_line("  5) Exit");
    box_line("");
    box_line(&paint(DIM, "Esc: cancel prompt | Ctrl+U: clear input"));
    box_bottom();
    flush();
}

pub fn print_mode_menu() {
    println!();
    box_top("Mode");
    box_line("  1) Character Password");
    box_line("  2) Passphrase");
    box_bottom();
    flush();
}

pub fn print_settings(settings: &Settings, generator: &Generator) {
    println!();
    box_top("Current settings");
    for (label, value) in settings.fields() {
        box_field(label, &value);
    }
    box_line("");
    box_field("source", csprng::source_name());
    if settings.mode == Mode::Password {
        match generator.alphabet_size(settings) {
            Ok(size) => {
                box_field("alphabet", &size.to_string());
                box_field(
                    "entropy",
                    &format!("{:.1} bits", entropy::bits(settings.length, size)),
                );
            }
            Err(e) => box_field("alphabet", &e.to_string()),
        }
    }
    box_bottom();
    flush();
}

/// Print a freshly generated batch.
pub fn print_batch(batch: &[GeneratedSecret]) {
    println!();
    for secret in batch {
        println!("{}", secret.as_str());
        if let Some(summary) = summary(secret) {
            println!("{summary}");
            println!();
        }
    }
    flush();
}

/// Print the retained batch, numbered from 1.
pub fn print_history(batch: &[GeneratedSecret]) {
    println!();
    if batch.is_empty() {
        print_error("No passwords generated yet.");
        return;
    }
    for (i, secret) in batch.iter().enumerate() {
        println!("{:>2}) {}", i + 1, secret.as_str());
    }
    flush();
}

fn summary(secret: &GeneratedSecret) -> Option<String> {
    let alphabet = secret.alphabet_size()?;
    let bits = secret.entropy_bits()?;
    Some(format!(
        " -> length={}, alphabet={}, entropy={:.1} bits",
        secret.char_count(),
        alphabet,
        bits
    ))
}
