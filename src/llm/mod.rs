#[cfg(any(test, feature = "test-util"))]
pub mod scripted;

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::error::ClientError;

#[cfg(any(test, feature = "test-util"))]
pub use scripted::{RecordedCall, ScriptedClient};

/// A hosted chat-completion endpoint: one rendered prompt in, one text out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ClientError>;
}

/// Client for an OpenAI-compatible chat completions API (Perplexity by default).
///
/// Requests are built from `async_openai` types and sent over `reqwest` so the
/// HTTP status stays visible for error classification. No retries.
#[derive(Clone)]
pub struct LLMClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl LLMClient {
    pub fn new(api_key: Option<String>, base_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout: None,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!(
                "⚠️ {} is not set; every analysis will fail authentication",
                config.api_key_env
            );
        }

        let mut client = Self::new(api_key, config.base_url.clone(), config.model.clone());
        client.timeout = config.request_timeout_secs.map(Duration::from_secs);
        client
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ModelClient for LLMClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ClientError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| ClientError::Authentication {
            reason: "no API key configured".to_string(),
        })?;

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| ClientError::Model { reason: e.to_string() })?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestMessage::User(message)])
            .temperature(temperature)
            .build()
            .map_err(|e| ClientError::Model { reason: e.to_string() })?;

        info!("🤖 [LLM] Sending request (Model: {})...", self.model);

        let mut builder = self.http.post(self.endpoint()).bearer_auth(api_key).json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(classify_transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(classify_transport)?;

        if !status.is_success() {
            return Err(classify_failure(status, &String::from_utf8_lossy(&body)));
        }

        let completion: CreateChatCompletionResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Model {
                reason: format!("undecodable completion: {}", e),
            })?;

        info!("🤖 [LLM] Response received.");

        extract_content(completion)
    }
}

fn extract_content(completion: CreateChatCompletionResponse) -> Result<String, ClientError> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| ClientError::Model {
            reason: "provider returned no choices".to_string(),
        })
}

fn classify_transport(err: reqwest::Error) -> ClientError {
    if let Some(status) = err.status() {
        return classify_failure(status, &err.to_string());
    }
    let reason = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    };
    ClientError::Transport { reason }
}

/// Map a non-success provider response onto the client error taxonomy.
///
/// The status code decides first; a body-level error code or type is
/// consulted for gateways that wrap auth and quota failures in other
/// statuses.
pub fn classify_failure(status: StatusCode, body: &str) -> ClientError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let error_obj = parsed.as_ref().and_then(|v| v.get("error"));

    let message = error_obj
        .and_then(|e| e.get("message").and_then(|m| m.as_str()).or_else(|| e.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| body.chars().take(200).collect());
    let reason = format!("HTTP {}: {}", status.as_u16(), message);

    let tag = error_obj
        .map(|e| {
            [e.get("code"), e.get("type")]
                .into_iter()
                .flatten()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Authentication { reason },
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { reason },
        _ if tag.contains("invalid_api_key") || tag.contains("authentication") => {
            ClientError::Authentication { reason }
        }
        _ if tag.contains("rate_limit") => ClientError::RateLimited { reason },
        StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => ClientError::Transport { reason },
        _ => ClientError::Model { reason },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_authentication() {
        let body = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error","code":401}}"#;
        let err = classify_failure(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, ClientError::Authentication { .. }));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_too_many_requests_is_rate_limited() {
        let err = classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(
            err,
            ClientError::RateLimited {
                reason: "HTTP 429: slow down".to_string()
            }
        );
    }

    #[test]
    fn test_body_code_overrides_generic_status() {
        let body = r#"{"error":{"message":"quota","code":"rate_limit_exceeded"}}"#;
        let err = classify_failure(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ClientError::RateLimited { .. }));

        let body = r#"{"error":{"message":"bad key","type":"invalid_api_key"}}"#;
        let err = classify_failure(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ClientError::Authentication { .. }));
    }

    #[test]
    fn test_gateway_errors_are_transport() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(matches!(err, ClientError::Transport { .. }));
    }

    #[test]
    fn test_other_failures_are_model_errors() {
        let body = r#"{"error":{"message":"Invalid model 'nope'","type":"invalid_model"}}"#;
        let err = classify_failure(StatusCode::BAD_REQUEST, body);
        assert_eq!(
            err,
            ClientError::Model {
                reason: "HTTP 400: Invalid model 'nope'".to_string()
            }
        );

        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(err, ClientError::Model { .. }));
    }

    #[test]
    fn test_extract_content_first_choice() {
        let json = r#"{
            "id": "abc",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "sonar-reasoning",
            "choices": [
                {"index": 0, "finish_reason": "stop", "message": {"role": "assistant", "content": "MSFT looks fine"}}
            ]
        }"#;
        let completion: CreateChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_content(completion).unwrap(), "MSFT looks fine");
    }

    #[test]
    fn test_extract_content_no_choices() {
        let json = r#"{"id":"abc","object":"chat.completion","created":1,"model":"m","choices":[]}"#;
        let completion: CreateChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(extract_content(completion), Err(ClientError::Model { .. })));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Unroutable base URL: reaching the network would yield Transport, not Authentication
        let client = LLMClient::new(None, "http://127.0.0.1:9".to_string(), "sonar".to_string());
        let err = client.complete("hello", 0.5).await.unwrap_err();
        assert!(matches!(err, ClientError::Authentication { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let client = LLMClient::new(Some("key".to_string()), "http://127.0.0.1:9".to_string(), "sonar".to_string())
            .with_timeout(Duration::from_secs(5));
        let err = client.complete("hello", 0.5).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = LLMClient::new(None, "https://api.perplexity.ai/".to_string(), "sonar".to_string());
        assert_eq!(client.endpoint(), "https://api.perplexity.ai/chat/completions");
        assert_eq!(client.model(), "sonar");
    }
}
