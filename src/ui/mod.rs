//! Terminal UI components (spinner, colors, prompt helpers).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow, treating Ctrl+C or Escape as a clean exit.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_prompts_are_not_errors() {
        for err in [
            InquireError::OperationCanceled,
            InquireError::OperationInterrupted,
        ] {
            assert!(is_prompt_cancelled(&err));
            assert!(handle_prompt_cancellation(|| Err(err.into())).is_ok());
        }
    }

    #[test]
    fn test_other_errors_propagate() {
        assert!(!is_prompt_cancelled(&InquireError::Custom("bad input".into())));

        let result = handle_prompt_cancellation(|| anyhow::bail!("config is read-only"));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("read-only"));
    }
}
