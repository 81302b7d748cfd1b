#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file
//! 3. Built-in defaults

use std::time::Duration;

use oracle_cli::config::{ConfigFile, Mode, OracleConfig, ResolveOptions, resolve_config};
use oracle_cli::oracle::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        oracle: OracleConfig {
            endpoint: Some("http://config.local/chat".to_string()),
            mode: Some(Mode::Remote),
            timeout_secs: Some(12),
            simulated_delay_ms: Some(800),
        },
    }
}

#[test]
fn test_config_file_used_when_cli_not_specified() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local/chat");
    assert_eq!(resolved.timeout, Duration::from_secs(12));
    assert_eq!(resolved.simulated_delay, Duration::from_millis(800));
    assert_eq!(resolved.mode, Mode::Remote);
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let options = ResolveOptions {
        endpoint: Some("https://cli.local/chat".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.endpoint, "https://cli.local/chat");
}

#[test]
fn test_cli_simulated_overrides_config_mode() {
    let options = ResolveOptions {
        simulated: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.mode, Mode::Simulated);
}

#[test]
fn test_config_simulated_mode_without_cli_flag() {
    let mut config = make_config_with_defaults();
    config.oracle.mode = Some(Mode::Simulated);

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.mode, Mode::Simulated);
}

#[test]
fn test_cli_timeout_and_delay_override_config() {
    let options = ResolveOptions {
        timeout_secs: Some(3),
        simulated_delay_ms: Some(0),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.timeout, Duration::from_secs(3));
    assert_eq!(resolved.simulated_delay, Duration::ZERO);
}

#[test]
fn test_defaults_fill_empty_config() {
    let config: ConfigFile = toml::from_str("").unwrap();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn test_invalid_config_endpoint_returns_error() {
    let mut config = make_config_with_defaults();
    config.oracle.endpoint = Some("delphi".to_string());

    assert!(resolve_config(&ResolveOptions::default(), &config).is_err());
}
