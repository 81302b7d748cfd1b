use anyhow::Result;

use super::{build_controller, load_config, open_session_store};
use crate::cli::GlobalArgs;
use crate::consult::{PlainSurface, TerminalSurface};
use crate::oracle::Submission;

pub struct AskOptions {
    pub question: Vec<String>,
    pub plain: bool,
}

/// Asks one question and returns the process exit code.
///
/// An unavailable oracle still prints the fallback message, but exits with
/// `EX_UNAVAILABLE` so scripts can tell the difference.
pub async fn run_ask(global: &GlobalArgs, options: AskOptions) -> Result<exitcode::ExitCode> {
    let config = load_config(global)?;
    let store = open_session_store(global)?;
    let question = options.question.join(" ");

    let submission = if options.plain {
        build_controller(PlainSurface, &config, &store)?
            .submit(&question)
            .await
    } else {
        build_controller(TerminalSurface::new(), &config, &store)?
            .submit(&question)
            .await
    };

    Ok(exit_code(&submission))
}

fn exit_code(submission: &Submission) -> exitcode::ExitCode {
    match submission {
        Submission::Answered(_) => exitcode::OK,
        Submission::Unavailable(err) => {
            crate::status!("{err}");
            exitcode::UNAVAILABLE
        }
        Submission::Empty => {
            crate::warn!("Nothing to ask: the question is empty");
            exitcode::USAGE
        }
        Submission::Ignored | Submission::Superseded => exitcode::TEMPFAIL,
    }
}
