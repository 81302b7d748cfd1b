use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "oracle")]
#[command(about = "Ask the Oracle from your terminal")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Chat endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Answer locally with a canned response instead of calling the endpoint
    #[arg(short = 's', long, global = true)]
    pub simulated: bool,

    /// Seconds to wait for an answer
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Delay of the simulated oracle in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    pub delay_ms: Option<u64>,

    /// Keep the session identifier in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print diagnostic logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

impl From<&GlobalArgs> for ResolveOptions {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            endpoint: args.endpoint.clone(),
            simulated: args.simulated,
            timeout_secs: args.timeout,
            simulated_delay_ms: args.delay_ms,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Print only the answer
        #[arg(short = 'p', long)]
        plain: bool,
    },
    /// Show or reset the session identifier
    Session {
        /// Forget the stored identifier; a new one is created on next use
        #[arg(long)]
        reset: bool,
    },
    /// Check whether the oracle endpoint is healthy
    Health,
    /// Configure oracle settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
