//! Interactive text menu.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run the interactive menu until the user exits.
pub fn run() {
    gen_main_menu();
}
