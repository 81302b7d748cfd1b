//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select, Text};

use crate::config::{ConfigFile, ConfigManager, Mode, OracleConfig};
use crate::oracle::{DEFAULT_ENDPOINT, DEFAULT_SIMULATED_DELAY, DEFAULT_TIMEOUT};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the config file; otherwise edits it interactively.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_current_defaults(&manager.load_or_default()?);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let current = config.oracle.clone();

    let mode = select_mode(current.mode)?;
    let endpoint = prompt_endpoint(current.endpoint.as_deref())?;
    let timeout_secs = CustomType::<u64>::new("Timeout (seconds):")
        .with_default(current.timeout_secs.unwrap_or(DEFAULT_TIMEOUT.as_secs()))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    if timeout_secs == 0 {
        bail!("Timeout must be at least 1 second");
    }
    let simulated_delay_ms = CustomType::<u64>::new("Simulated delay (ms):")
        .with_default(
            current
                .simulated_delay_ms
                .unwrap_or(DEFAULT_SIMULATED_DELAY.as_millis() as u64),
        )
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    config.oracle = OracleConfig {
        endpoint: Some(endpoint),
        mode: Some(mode),
        timeout_secs: Some(timeout_secs),
        simulated_delay_ms: Some(simulated_delay_ms),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let oracle = &config.oracle;
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}          {}",
        Style::label("mode"),
        oracle.mode.map_or_else(not_set, |m| Style::value(m.as_str()))
    );
    println!(
        "  {}      {}",
        Style::label("endpoint"),
        oracle.endpoint.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("timeout_secs"),
        oracle.timeout_secs.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("delay_ms    "),
        oracle.simulated_delay_ms.map_or_else(not_set, Style::value)
    );
    println!();
}

fn select_mode(default: Option<Mode>) -> Result<Mode> {
    let options = vec![Mode::Remote.as_str(), Mode::Simulated.as_str()];
    let start = usize::from(default == Some(Mode::Simulated));

    let selection = Select::new("Default mode:", options)
        .with_starting_cursor(start)
        .prompt()?;

    Ok(if selection == Mode::Simulated.as_str() {
        Mode::Simulated
    } else {
        Mode::Remote
    })
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Receives POST {message, session_id}")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.to_string())
}
