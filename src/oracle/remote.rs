use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::OracleUnavailable;
use super::provider::ResponseProvider;

/// Endpoint used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "https://oracle-delphi-api.onrender.com/chat";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
    #[serde(default)]
    session_id: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Asks a remote chat endpoint.
///
/// One `POST` per question with a JSON body of `{message, session_id}`; the
/// endpoint must answer `2xx` with `{response}`.
pub struct RemoteProvider {
    client: Client,
    endpoint: String,
}

impl RemoteProvider {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Base URL of the service, i.e. the endpoint without its `/chat` segment.
    pub fn base_url(&self) -> &str {
        let trimmed = self.endpoint.trim_end_matches('/');
        trimmed.strip_suffix("/chat").unwrap_or(trimmed)
    }

    /// Probes `GET <base>/health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to oracle endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Health check failed with status {status}");
        }

        response
            .json::<HealthStatus>()
            .await
            .context("Failed to parse health check response")
    }
}

#[async_trait]
impl ResponseProvider for RemoteProvider {
    async fn answer(&self, question: &str, session_id: &str) -> Result<String, OracleUnavailable> {
        let body = ChatRequest {
            message: question,
            session_id,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(OracleUnavailable::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleUnavailable::Status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(OracleUnavailable::Transport)?;
        let chat: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| OracleUnavailable::Decode(e.to_string()))?;

        if let Some(echoed) = chat.session_id.as_deref()
            && echoed != session_id
        {
            tracing::debug!(sent = %session_id, %echoed, "oracle echoed a different session id");
        }

        Ok(chat.response)
    }

    fn describe(&self) -> String {
        format!("remote ({})", self.endpoint)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_chat_segment() {
        let provider = RemoteProvider::new("http://localhost:8000/chat".to_string());
        assert_eq!(provider.base_url(), "http://localhost:8000");

        let provider = RemoteProvider::new("http://localhost:8000/chat/".to_string());
        assert_eq!(provider.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_without_chat_segment() {
        let provider = RemoteProvider::new("http://localhost:8000/api/ask".to_string());
        assert_eq!(provider.base_url(), "http://localhost:8000/api/ask");
    }

    #[test]
    fn test_chat_request_wire_format() {
        let body = ChatRequest {
            message: "Who am I?",
            session_id: "session-42",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Who am I?", "session_id": "session-42"})
        );
    }

    #[test]
    fn test_chat_response_session_id_is_optional() {
        let chat: ChatResponse = serde_json::from_str(r#"{"response": "Yes."}"#).unwrap();
        assert_eq!(chat.response, "Yes.");
        assert!(chat.session_id.is_none());
    }

    #[test]
    fn test_chat_response_requires_response_field() {
        let result = serde_json::from_str::<ChatResponse>(r#"{"answer": "Yes."}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_health_status_is_healthy() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "message": "AI agent is ready"}"#)
                .unwrap();
        assert!(status.is_healthy());

        let status: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!status.is_healthy());
    }

    #[test]
    fn test_describe_names_endpoint() {
        let provider = RemoteProvider::new(DEFAULT_ENDPOINT.to_string());
        assert_eq!(provider.describe(), format!("remote ({DEFAULT_ENDPOINT})"));
        assert!(provider.contemplates());
    }
}
