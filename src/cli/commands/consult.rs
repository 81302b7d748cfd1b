use anyhow::Result;

use super::{build_controller, load_config, open_session_store};
use crate::cli::GlobalArgs;
use crate::consult::{ConsultSession, TerminalSurface};

pub async fn run_consult(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = open_session_store(global)?;
    let controller = build_controller(TerminalSurface::new(), &config, &store)?;

    ConsultSession::new(config, controller).run().await
}
