//! `intents` binary entry point

fn main() {
    if let Err(e) = intents_cli::run() {
        intents_cli::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
