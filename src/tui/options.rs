//! Menu loop and settings prompts.

use crate::pass::{GeneratedSecret, Generator};
use crate::settings::{Mode, Settings};
use crate::terminal::{clear, print_error, print_success, reset_terminal, stdin_is_tty};

use super::{
    ask_int, ask_text, ask_yes_no, enter_prompt, print_batch, print_history, print_main_menu,
    print_mode_menu, print_settings, read_line,
};

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let generator = Generator::default();
    let mut settings = Settings::default();
    let mut last: Vec<GeneratedSecret> = Vec::new();

    loop {
        print_main_menu();

        let Some(input) = read_line(enter_prompt()) else {
            if stdin_is_tty() {
                continue;
            }
            log::debug!("input closed, leaving menu");
            break;
        };

        match input.trim() {
            "" | "1" => generate(&generator, &settings, &mut last),
            "2" => {
                if let Some(updated) = change_settings(&settings) {
                    log::debug!("settings replaced: {updated:?}");
                    settings = updated;
                    print_success("Settings updated.");
                }
            }
            "3" => print_settings(&settings, &generator),
            "4" => print_history(&last),
            "5" => {
                println!("Goodbye!");
                break;
            }
            _ => print_error("Invalid choice."),
        }
    }

    // Dropping the history wipes it.
    last.clear();
}

/// Replace the retained batch with a new one. On failure the history stays
/// empty and the session continues.
fn generate(generator: &Generator, settings: &Settings, last: &mut Vec<GeneratedSecret>) {
    last.clear();
    match generator.generate_batch(settings) {
        Ok(batch) => {
            print_batch(&batch);
            *last = batch;
        }
        Err(e) => {
            log::warn!("generation aborted: {e}");
            print_error(&format!("Cannot generate: {e}"));
        }
    }
}

/// Walk the settings prompts. Returns the new settings only when every
/// prompt was answered; a cancel leaves `current` in force.
fn change_settings(current: &Settings) -> Option<Settings> {
    print_mode_menu();
    let mode = read_line("Mode (1/2)")?;

    let updated = if mode.trim() == "2" {
        let words = ask_int("Words per passphrase", current.words, &Settings::WORDS_RANGE)?;
        let separator = ask_text("Separator", &current.separator)?;
        let count = ask_int("How many", current.count, &Settings::COUNT_RANGE)?;
        Settings {
            mode: Mode::Passphrase,
            words,
            separator,
            count,
            ..current.clone()
        }
    } else {
        let length = ask_int("Password length", current.length, &Settings::LENGTH_RANGE)?;
        let upper = ask_yes_no("Include uppercase?", current.upper)?;
        let digits = ask_yes_no("Include digits?", current.digits)?;
        let symbols = ask_yes_no("Include symbols?", current.symbols)?;
        let avoid_ambiguous =
            ask_yes_no("Avoid ambiguous characters?", current.avoid_ambiguous)?;
        let count = ask_int("How many", current.count, &Settings::COUNT_RANGE)?;
        Settings {
            mode: Mode::Password,
            length,
            upper,
            digits,
            symbols,
            avoid_ambiguous,
            count,
            ..current.clone()
        }
    };

    Some(updated)
}
