//! XDG-style path utilities for configuration and state directories.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the layout is the same on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "oracle";

/// Returns the configuration directory for oracle.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/oracle` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/oracle` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the state directory for oracle, where the session store lives.
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/oracle` if `XDG_STATE_HOME` is set
/// 2. `~/.local/state/oracle` otherwise
pub fn state_dir() -> Result<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var(var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let mut dir = dirs::home_dir().context("Failed to determine home directory")?;
    dir.extend(fallback);
    Ok(dir.join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(var: &str, value: Option<&str>, f: F) {
        let original = std::env::var(var).ok();
        // SAFETY: tests touching the environment are serialized
        unsafe {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }

        f();

        // SAFETY: see above
        unsafe {
            match original {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_env("XDG_CONFIG_HOME", None, || {
            assert!(config_dir().unwrap().ends_with(".config/oracle"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_env("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/oracle"));
        });
    }

    #[test]
    #[serial]
    fn test_state_dir_default() {
        with_env("XDG_STATE_HOME", None, || {
            assert!(state_dir().unwrap().ends_with(".local/state/oracle"));
        });
    }

    #[test]
    #[serial]
    fn test_state_dir_empty_var_falls_back() {
        with_env("XDG_STATE_HOME", Some(""), || {
            assert!(state_dir().unwrap().ends_with(".local/state/oracle"));
        });
    }

    #[test]
    #[serial]
    fn test_state_dir_xdg_override() {
        with_env("XDG_STATE_HOME", Some("/custom/state"), || {
            assert_eq!(state_dir().unwrap(), PathBuf::from("/custom/state/oracle"));
        });
    }
}
