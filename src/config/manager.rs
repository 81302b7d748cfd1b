use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::oracle::{DEFAULT_ENDPOINT, DEFAULT_SIMULATED_DELAY, DEFAULT_TIMEOUT};
use crate::paths;

/// Which response provider answers questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ask the remote chat endpoint.
    #[default]
    Remote,
    /// Answer locally with a canned response after a fixed delay.
    Simulated,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Simulated => "simulated",
        }
    }
}

/// Settings in the `[oracle]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Chat endpoint URL.
    pub endpoint: Option<String>,
    /// Default mode.
    pub mode: Option<Mode>,
    /// Seconds to wait for an answer before giving up.
    pub timeout_secs: Option<u64>,
    /// Delay of the simulated provider, in milliseconds.
    pub simulated_delay_ms: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/oracle/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub mode: Mode,
    pub endpoint: String,
    pub timeout: Duration,
    pub simulated_delay: Duration,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    /// `true` forces simulated mode; `false` defers to the config file.
    pub simulated: bool,
    pub timeout_secs: Option<u64>,
    pub simulated_delay_ms: Option<u64>,
}

/// Resolves configuration. Priority: CLI options, then config file, then defaults.
///
/// # Errors
///
/// Returns an error if the endpoint is not an `http(s)` URL or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.oracle;

    let mode = if options.simulated {
        Mode::Simulated
    } else {
        file.mode.unwrap_or_default()
    };

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validate_endpoint(&endpoint)?;

    let timeout = match options.timeout_secs.or(file.timeout_secs) {
        Some(0) => bail!(
            "Invalid timeout: must be at least 1 second\n\n\
             Fix it via:\n  \
             - CLI option: oracle --timeout <secs>\n  \
             - Config file: ~/.config/oracle/config.toml"
        ),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    let simulated_delay = options
        .simulated_delay_ms
        .or(file.simulated_delay_ms)
        .map_or(DEFAULT_SIMULATED_DELAY, Duration::from_millis);

    Ok(ResolvedConfig {
        mode,
        endpoint,
        timeout,
        simulated_delay,
    })
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint)
        .with_context(|| format!("Invalid endpoint URL: '{endpoint}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Only http:// and https:// endpoints are supported"
        );
    }

    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/oracle/config.toml`
    /// or `~/.config/oracle/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
