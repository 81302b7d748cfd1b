use async_trait::async_trait;
use std::time::Duration;

use super::error::OracleUnavailable;

/// Canned answer given by [`SimulatedProvider`].
pub const SIMULATED_RESPONSE: &str =
    "The Oracle has heard your question. The answer you seek already lies within you.";

/// Delay used by [`SimulatedProvider`] unless configured otherwise.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1200);

/// Source of answers for the interaction controller.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Answers a single, already normalized question.
    async fn answer(&self, question: &str, session_id: &str) -> Result<String, OracleUnavailable>;

    /// Whether the surface should show the "contemplating" state while waiting.
    fn contemplates(&self) -> bool {
        true
    }

    /// Short human-readable description, used in `/config` output and logs.
    fn describe(&self) -> String;
}

/// Answers every question with [`SIMULATED_RESPONSE`] after a fixed delay.
///
/// No network I/O; useful for demos and offline operation.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
}

impl SimulatedProvider {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl ResponseProvider for SimulatedProvider {
    async fn answer(&self, question: &str, session_id: &str) -> Result<String, OracleUnavailable> {
        tracing::debug!(%question, %session_id, delay = ?self.delay, "simulating oracle");
        tokio::time::sleep(self.delay).await;
        Ok(SIMULATED_RESPONSE.to_string())
    }

    fn contemplates(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        format!("simulated ({} ms delay)", self.delay.as_millis())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_waits_then_answers() {
        let provider = SimulatedProvider::default();
        let start = tokio::time::Instant::now();

        let answer = provider.answer("Will it rain?", "session-1").await.unwrap();

        assert_eq!(answer, SIMULATED_RESPONSE);
        assert!(start.elapsed() >= DEFAULT_SIMULATED_DELAY);
    }

    #[test]
    fn test_simulated_does_not_contemplate() {
        assert!(!SimulatedProvider::default().contemplates());
    }

    #[test]
    fn test_simulated_describe_mentions_delay() {
        let provider = SimulatedProvider::new(Duration::from_millis(250));
        assert_eq!(provider.describe(), "simulated (250 ms delay)");
    }
}
