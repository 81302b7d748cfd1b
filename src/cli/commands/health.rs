//! Endpoint health check handler.

use anyhow::Result;

use super::load_config;
use crate::cli::GlobalArgs;
use crate::oracle::RemoteProvider;
use crate::ui::{Spinner, Style};

/// Probes the endpoint's `/health` route and returns the process exit code.
///
/// The remote endpoint is probed even in simulated mode.
pub async fn run_health(global: &GlobalArgs) -> Result<exitcode::ExitCode> {
    let config = load_config(global)?;
    let provider = RemoteProvider::new(config.endpoint);

    let spinner = Spinner::new("Reaching Delphi...");
    let result = provider.health().await;
    spinner.stop();

    match result {
        Ok(health) if health.is_healthy() => {
            println!(
                "{} {} {}",
                Style::success("✓"),
                Style::value(provider.base_url()),
                Style::secondary(health.message.as_deref().unwrap_or("healthy"))
            );
            Ok(exitcode::OK)
        }
        Ok(health) => {
            println!(
                "{} {} reports status '{}'",
                Style::warning("!"),
                Style::value(provider.base_url()),
                health.status
            );
            Ok(exitcode::UNAVAILABLE)
        }
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            Ok(exitcode::UNAVAILABLE)
        }
    }
}
