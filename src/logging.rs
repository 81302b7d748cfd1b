//! Diagnostic logging via `tracing`.
//!
//! Diagnostics go to stderr and stay silent by default. `RUST_LOG` takes
//! precedence; otherwise `--verbose` raises the crate's level to `debug`.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "oracle_cli=debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
