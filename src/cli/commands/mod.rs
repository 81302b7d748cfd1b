//! Subcommand implementations.

use anyhow::Result;

use super::GlobalArgs;
use crate::config::{ConfigManager, Mode, ResolveOptions, ResolvedConfig, resolve_config};
use crate::oracle::{
    InteractionController, RemoteProvider, ResponseProvider, SimulatedProvider, Surface,
};
use crate::session::{SESSION_KEY, SessionStore};

/// One-shot question handler.
pub mod ask;

/// Configure command handler.
pub mod configure;

/// Interactive consult mode handler.
pub mod consult;

/// Endpoint health check handler.
pub mod health;

/// Session identifier handler.
pub mod session;

/// Merges CLI flags with the config file.
pub fn load_config(global: &GlobalArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(&ResolveOptions::from(global), &file_config)
}

pub fn open_session_store(global: &GlobalArgs) -> Result<SessionStore> {
    if global.ephemeral {
        SessionStore::in_memory()
    } else {
        SessionStore::open_default()
    }
}

pub fn build_provider(config: &ResolvedConfig) -> Box<dyn ResponseProvider> {
    match config.mode {
        Mode::Remote => Box::new(RemoteProvider::new(config.endpoint.clone())),
        Mode::Simulated => Box::new(SimulatedProvider::new(config.simulated_delay)),
    }
}

/// Wires a controller for `surface` from the resolved configuration.
pub fn build_controller<S: Surface>(
    surface: S,
    config: &ResolvedConfig,
    store: &SessionStore,
) -> Result<InteractionController<S>> {
    let session_id = store.get_or_create(SESSION_KEY)?;
    tracing::debug!(%session_id, mode = config.mode.as_str(), "consulting the oracle");

    Ok(
        InteractionController::new(surface, build_provider(config), session_id)
            .with_timeout(config.timeout),
    )
}
