#![allow(dead_code, clippy::unwrap_used)]
//! Shared test fixtures.

use std::sync::{Mutex, MutexGuard};

use oracle_cli::oracle::{PLACEHOLDER, Reply, Surface};

/// Snapshot of everything a surface displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub input: String,
    pub question: Option<String>,
    pub response: Option<String>,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub completed: bool,
    pub contemplating: bool,
    pub focus_count: usize,
    pub ever_contemplated: bool,
}

/// Headless surface that records state the way a page would hold it.
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                input_enabled: true,
                submit_enabled: true,
                ..SurfaceState::default()
            }),
        }
    }
}

impl RecordingSurface {
    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap()
    }

    pub fn type_input(&self, text: &str) {
        self.lock().input = text.to_string();
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn snapshot(&self) -> SurfaceState {
        self.lock().clone()
    }
}

impl Surface for RecordingSurface {
    fn show_question(&self, question: &str) {
        self.lock().question = Some(question.to_string());
    }

    fn show_placeholder(&self) {
        self.lock().response = Some(PLACEHOLDER.to_string());
    }

    fn show_reply(&self, reply: Reply<'_>) {
        self.lock().response = Some(reply.text().to_string());
    }

    fn set_controls_enabled(&self, enabled: bool) {
        let mut state = self.lock();
        state.input_enabled = enabled;
        state.submit_enabled = enabled;
    }

    fn set_completed(&self, completed: bool) {
        self.lock().completed = completed;
    }

    fn set_contemplating(&self, contemplating: bool) {
        let mut state = self.lock();
        state.contemplating = contemplating;
        state.ever_contemplated |= contemplating;
    }

    fn clear_input(&self) {
        self.lock().input.clear();
    }

    fn focus_input(&self) {
        self.lock().focus_count += 1;
    }
}
