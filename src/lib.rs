//! # oracle - Ask the Oracle
//!
//! `oracle` puts a question to a remote chat endpoint and shows the answer,
//! or, in simulated mode, answers with a canned prophecy after a short pause.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive consult mode
//! oracle
//!
//! # One question, answer only
//! oracle ask --plain will it rain tomorrow
//!
//! # No network
//! oracle --simulated
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/oracle/config.toml`:
//!
//! ```toml
//! [oracle]
//! mode = "remote"
//! endpoint = "https://oracle-delphi-api.onrender.com/chat"
//! timeout_secs = 30
//! simulated_delay_ms = 1200
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Interactive consult mode and terminal surfaces.
pub mod consult;

/// Diagnostic logging setup.
pub mod logging;

/// The interaction controller, its surface contract and response providers.
pub mod oracle;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration and state.
pub mod paths;

/// Session identifier storage.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
