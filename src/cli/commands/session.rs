//! Session identifier command handler.

use anyhow::Result;

use super::open_session_store;
use crate::cli::GlobalArgs;
use crate::session::SESSION_KEY;
use crate::ui::Style;

/// Prints the session identifier, creating one if needed, or forgets it.
pub fn run_session(global: &GlobalArgs, reset: bool) -> Result<()> {
    let store = open_session_store(global)?;

    if reset {
        if store.reset(SESSION_KEY)? {
            crate::status!("{} Session forgotten", Style::success("✓"));
        } else {
            crate::status!("No session to forget");
        }
        return Ok(());
    }

    println!("{}", store.get_or_create(SESSION_KEY)?);
    Ok(())
}
