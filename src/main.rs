use std::env;

mod cli;
mod csprng;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    init_logging();
    exits::restore_termios();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if cli::menu_requested(&args) {
        tui::run();
    } else {
        cli::run(&args);
    }
}

/// Log to stderr at `warn` unless RUST_LOG says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
