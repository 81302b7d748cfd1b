//! Consult mode UI components.

use crate::config::ResolvedConfig;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Ask, and the Oracle shall answer",
        Style::header("oracle"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("The Oracle falls silent. Farewell."));
}

pub fn print_config(config: &ResolvedConfig, provider: &str) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("mode"),
        Style::value(config.mode.as_str())
    );
    println!("  {}   {}", Style::label("provider"), Style::value(provider));
    println!(
        "  {}    {}s",
        Style::label("timeout"),
        Style::value(config.timeout.as_secs())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_session(session_id: &str) {
    println!("{} {}", Style::label("session"), Style::value(session_id));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/session"),
        Style::secondary("Show the session identifier")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Leave the temple")
    );
    println!();
    println!(
        "{}",
        Style::hint("Anything else is a question. A trailing '?' is added for you.")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
