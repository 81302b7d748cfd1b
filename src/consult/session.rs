use std::future::Future;

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::terminal::TerminalSurface;
use super::ui;
use crate::config::ResolvedConfig;
use crate::oracle::InteractionController;
use crate::ui::is_prompt_cancelled;

/// What the loop does after handling one prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// An interactive consult session.
///
/// Each prompt line is either a slash command or a question handed to the
/// controller. Submissions are awaited before the next prompt is drawn, so
/// the prompt never competes with an in-flight question.
pub struct ConsultSession {
    config: ResolvedConfig,
    controller: InteractionController<TerminalSurface>,
}

impl ConsultSession {
    pub fn new(
        config: ResolvedConfig,
        controller: InteractionController<TerminalSurface>,
    ) -> Self {
        Self { config, controller }
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("☉")
            .with_fg(Color::LightYellow)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkYellow));

        loop {
            let line = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask a question, /help for commands, Ctrl+C to leave")
                .prompt();

            let step = match line {
                Ok(line) => match parse_input(&line) {
                    Input::Command(cmd) => self.handle_command(cmd),
                    Input::Question(text) => self.ask_until(&text, interrupted()).await,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    Step::Quit
                }
                Err(e) => return Err(e.into()),
            };

            if step == Step::Quit {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Submits a question, giving up on it if `interrupt` resolves first.
    ///
    /// Dropping the submission returns the controller and surface to idle.
    async fn ask_until(&self, text: &str, interrupt: impl Future<Output = ()>) -> Step {
        tokio::select! {
            biased;
            _ = self.controller.submit(text) => Step::Continue,
            () = interrupt => {
                tracing::debug!("question abandoned by interrupt");
                println!();
                Step::Quit
            }
        }
    }

    fn handle_command(&self, cmd: SlashCommand) -> Step {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, &self.controller.provider().describe());
                Step::Continue
            }
            SlashCommand::Help => {
                ui::print_help();
                Step::Continue
            }
            SlashCommand::Session => {
                ui::print_session(self.controller.session_id());
                Step::Continue
            }
            SlashCommand::Quit => Step::Quit,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                Step::Continue
            }
        }
    }
}

/// Resolves on Ctrl+C. Never resolves if the signal cannot be watched.
async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::debug!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
