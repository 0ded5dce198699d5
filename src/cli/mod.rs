//! Command-line arguments.
//!
//! There are no flags yet. Any argument switches the interactive menu off and
//! prints a notice instead; nothing is generated.

pub const MENU_DISABLED: &str = "Menu disabled when using arguments.";

/// The menu only runs when the program name is the sole argument.
pub fn menu_requested(args: &[String]) -> bool {
    args.len() <= 1
}

/// Text shown instead of the menu.
pub fn notice(args: &[String]) -> &'static str {
    log::debug!(
        "{} argument(s) given, skipping menu",
        args.len().saturating_sub(1)
    );
    MENU_DISABLED
}

pub fn run(args: &[String]) {
    println!("{}", notice(args));
}
