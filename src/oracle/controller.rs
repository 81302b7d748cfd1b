use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::error::OracleUnavailable;
use super::provider::ResponseProvider;
use super::question::normalize_question;
use super::surface::{Reply, Surface};

/// Provider calls slower than this are treated as failures unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What happens when a question is submitted while another is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// The new submission is dropped; the in-flight one finishes normally.
    #[default]
    Ignore,
    /// The in-flight submission is cancelled and the new one takes over.
    Supersede,
}

/// Result of a single [`InteractionController::submit`] call.
#[derive(Debug)]
pub enum Submission {
    /// The input was blank; only the input was focused.
    Empty,
    /// Another submission was in flight and the policy is [`OverlapPolicy::Ignore`].
    Ignored,
    /// A newer submission took over before this one completed. Nothing was rendered.
    Superseded,
    Answered(String),
    Unavailable(OracleUnavailable),
}

impl Submission {
    /// Whether this submission rendered an outcome to the surface.
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Answered(_) | Self::Unavailable(_))
    }
}

#[derive(Debug, Default)]
struct Flight {
    ticket: u64,
    busy: bool,
    cancel: Option<CancellationToken>,
}

/// Drives a [`Surface`] through one `Idle -> Busy -> Idle` cycle per question.
///
/// Surface mutations happen under the flight lock so a stale completion can
/// never interleave with a newer submission. The lock is never held across an
/// `.await`.
pub struct InteractionController<S> {
    surface: S,
    provider: Box<dyn ResponseProvider>,
    session_id: String,
    timeout: Duration,
    overlap: OverlapPolicy,
    flight: Mutex<Flight>,
}

impl<S: Surface> InteractionController<S> {
    pub fn new(surface: S, provider: Box<dyn ResponseProvider>, session_id: String) -> Self {
        Self {
            surface,
            provider,
            session_id,
            timeout: DEFAULT_TIMEOUT,
            overlap: OverlapPolicy::default(),
            flight: Mutex::new(Flight::default()),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn provider(&self) -> &dyn ResponseProvider {
        self.provider.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.flight().busy
    }

    /// Submits raw input text.
    pub async fn submit(&self, raw: &str) -> Submission {
        let Some(question) = normalize_question(raw) else {
            self.surface.focus_input();
            return Submission::Empty;
        };

        let Some((ticket, cancel)) = self.begin(&question) else {
            tracing::debug!(%question, "submission ignored while busy");
            return Submission::Ignored;
        };
        let in_flight = InFlight {
            controller: self,
            ticket,
        };

        let call = tokio::time::timeout(
            self.timeout,
            self.provider.answer(&question, &self.session_id),
        );

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(ticket, "submission superseded before completion");
                return Submission::Superseded;
            }
            result = call => result.unwrap_or_else(|_| Err(OracleUnavailable::TimedOut(self.timeout))),
        };

        in_flight.settle(result)
    }

    fn flight(&self) -> MutexGuard<'_, Flight> {
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, question: &str) -> Option<(u64, CancellationToken)> {
        let mut flight = self.flight();

        if flight.busy {
            match self.overlap {
                OverlapPolicy::Ignore => return None,
                OverlapPolicy::Supersede => {
                    if let Some(previous) = flight.cancel.take() {
                        previous.cancel();
                    }
                }
            }
        }

        flight.ticket += 1;
        flight.busy = true;
        let cancel = CancellationToken::new();
        flight.cancel = Some(cancel.clone());

        self.surface.show_question(question);
        self.surface.set_controls_enabled(false);
        self.surface.show_placeholder();
        self.surface.set_completed(false);
        if self.provider.contemplates() {
            self.surface.set_contemplating(true);
        }

        Some((flight.ticket, cancel))
    }

    fn complete(&self, ticket: u64, result: Result<String, OracleUnavailable>) -> Submission {
        let mut flight = self.flight();

        if flight.ticket != ticket {
            return Submission::Superseded;
        }

        let submission = match result {
            Ok(answer) => {
                self.surface.show_reply(Reply::Answer(&answer));
                Submission::Answered(answer)
            }
            Err(err) => {
                tracing::debug!(error = %err, "oracle unavailable");
                self.surface.show_reply(Reply::Fallback);
                Submission::Unavailable(err)
            }
        };
        self.surface.set_completed(true);

        self.surface.set_contemplating(false);
        self.surface.clear_input();
        self.surface.set_controls_enabled(true);
        self.surface.focus_input();

        flight.busy = false;
        flight.cancel = None;

        submission
    }

    /// Returns to idle after a submission was dropped before it completed.
    fn abandon(&self, ticket: u64) {
        let mut flight = self.flight();

        if flight.ticket != ticket || !flight.busy {
            return;
        }
        tracing::debug!(ticket, "submission dropped before completion");

        if let Some(cancel) = flight.cancel.take() {
            cancel.cancel();
        }
        flight.busy = false;

        self.surface.set_contemplating(false);
        self.surface.clear_input();
        self.surface.set_controls_enabled(true);
        self.surface.focus_input();
    }
}

/// Resets the controller if a `submit` future is dropped mid-flight.
struct InFlight<'a, S: Surface> {
    controller: &'a InteractionController<S>,
    ticket: u64,
}

impl<S: Surface> InFlight<'_, S> {
    fn settle(self, result: Result<String, OracleUnavailable>) -> Submission {
        // complete() resets the flight itself; the drop that follows is a no-op.
        self.controller.complete(self.ticket, result)
    }
}

impl<S: Surface> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.controller.abandon(self.ticket);
    }
}
