//! Interactive consult mode.
//!
//! A REPL-style page: type a question, press Enter, watch the oracle answer.
//! Slash commands inspect the session and configuration.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod terminal;
mod ui;

pub use session::ConsultSession;
pub use terminal::{PlainSurface, TerminalSurface};
