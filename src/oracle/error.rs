use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// The one way consulting the oracle can fail.
///
/// Every variant is shown to the user as the same fallback message; the
/// variant itself only feeds diagnostics.
#[derive(Debug, Error)]
pub enum OracleUnavailable {
    #[error("oracle endpoint answered with status {0}")]
    Status(StatusCode),

    #[error("failed to reach the oracle endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("oracle response could not be decoded: {0}")]
    Decode(String),

    #[error("oracle did not answer within {0:?}")]
    TimedOut(Duration),
}
