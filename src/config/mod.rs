//! Configuration file management and CLI override resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, Mode, OracleConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
