//! Display contract the interaction controller drives.

/// Fixed message shown whenever the oracle cannot be reached.
pub const FALLBACK_RESPONSE: &str = "The mists obscure the Oracle's vision. Try again...";

/// Shown in the response area while a question is in flight.
pub const PLACEHOLDER: &str = "...";

/// What ends up in the response area once a submission completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Text provided by the response provider.
    Answer(&'a str),
    /// The oracle was unavailable; [`FALLBACK_RESPONSE`] is shown.
    Fallback,
}

impl Reply<'_> {
    pub const fn text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::Fallback => FALLBACK_RESPONSE,
        }
    }
}

/// The widget the user interacts with.
///
/// Implementations own an input field, a submit control, a question display, a
/// response display, and a container that can show a "contemplating" state.
/// All methods are synchronous and called in the order a single submission
/// needs them; none of them may block on I/O for long.
pub trait Surface: Send + Sync {
    fn show_question(&self, question: &str);

    /// Replaces the response area with [`PLACEHOLDER`].
    fn show_placeholder(&self);

    fn show_reply(&self, reply: Reply<'_>);

    /// Enables or disables both the input field and the submit control.
    fn set_controls_enabled(&self, enabled: bool);

    /// Toggles the completion visual state ("fade-in") of the response area.
    fn set_completed(&self, completed: bool);

    /// Toggles the busy visual state of the container.
    fn set_contemplating(&self, contemplating: bool);

    fn clear_input(&self);

    fn focus_input(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text() {
        assert_eq!(Reply::Answer("Yes.").text(), "Yes.");
        assert_eq!(Reply::Fallback.text(), FALLBACK_RESPONSE);
    }
}
