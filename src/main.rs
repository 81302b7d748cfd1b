use anyhow::Result;
use clap::Parser;

use oracle_cli::cli::commands::{ask, configure, consult, health, session};
use oracle_cli::cli::{Args, Command};
use oracle_cli::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let global = &args.global;

    output::init(output::OutputConfig::from_flags(global.quiet, global.no_color));
    logging::init(global.verbose);

    let code = match args.command {
        Some(Command::Ask { question, plain }) => {
            ask::run_ask(global, ask::AskOptions { question, plain }).await?
        }
        Some(Command::Session { reset }) => {
            session::run_session(global, reset)?;
            exitcode::OK
        }
        Some(Command::Health) => health::run_health(global).await?,
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
            exitcode::OK
        }
        None => {
            consult::run_consult(global).await?;
            exitcode::OK
        }
    };

    if code != exitcode::OK {
        std::process::exit(code);
    }

    Ok(())
}
