use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::oracle::{PLACEHOLDER, Reply, Surface};
use crate::ui::{Spinner, Style};

const CONTEMPLATING: &str = "The Oracle contemplates...";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Renders the exchange on an interactive terminal.
///
/// The busy state is a spinner; the reply is held back until the completion
/// state is set and then printed in one go. The input itself belongs to the
/// prompt, which is redrawn empty and focused after every submission.
pub struct TerminalSurface {
    spinner: Mutex<Option<Spinner>>,
    pending: Mutex<Option<(String, bool)>>,
    controls_enabled: AtomicBool,
}

impl TerminalSurface {
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            pending: Mutex::new(None),
            controls_enabled: AtomicBool::new(true),
        }
    }

    /// Whether the prompt may accept another question.
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled.load(Ordering::SeqCst)
    }

    fn spin(&self, message: &str) {
        let mut spinner = lock(&self.spinner);
        match spinner.as_ref() {
            Some(running) => running.set_message(message),
            None => *spinner = Some(Spinner::new(message)),
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = lock(&self.spinner).take() {
            spinner.stop();
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn show_question(&self, question: &str) {
        println!("{} {}", Style::label("You ask:"), Style::question(question));
    }

    fn show_placeholder(&self) {
        self.spin(PLACEHOLDER);
    }

    fn show_reply(&self, reply: Reply<'_>) {
        self.stop_spinner();
        let is_fallback = matches!(reply, Reply::Fallback);
        *lock(&self.pending) = Some((reply.text().to_string(), is_fallback));
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.store(enabled, Ordering::SeqCst);
    }

    fn set_completed(&self, completed: bool) {
        let pending = lock(&self.pending).take();
        if !completed {
            return;
        }

        if let Some((text, is_fallback)) = pending {
            let styled = if is_fallback {
                Style::warning(&text)
            } else {
                Style::answer(&text)
            };
            println!();
            println!("{styled}");
            println!();
        }
    }

    fn set_contemplating(&self, contemplating: bool) {
        if contemplating {
            self.spin(CONTEMPLATING);
        } else {
            self.stop_spinner();
        }
    }

    fn clear_input(&self) {}

    fn focus_input(&self) {
        if let Err(err) = io::stdout().flush() {
            tracing::debug!(error = %err, "failed to flush stdout");
        }
    }
}

/// Writes only the reply to stdout, for scripts and pipes.
#[derive(Debug, Default)]
pub struct PlainSurface;

impl Surface for PlainSurface {
    fn show_question(&self, _question: &str) {}

    fn show_placeholder(&self) {}

    fn show_reply(&self, reply: Reply<'_>) {
        println!("{}", reply.text());
    }

    fn set_controls_enabled(&self, _enabled: bool) {}

    fn set_completed(&self, _completed: bool) {}

    fn set_contemplating(&self, _contemplating: bool) {}

    fn clear_input(&self) {}

    fn focus_input(&self) {}
}
