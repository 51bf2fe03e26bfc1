//! Groq API client implementation
//!
//! Groq serves Llama models behind an OpenAI-compatible Chat Completions
//! endpoint. One request is sent per call; errors are reported as-is and
//! never retried.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const DEFAULT_MAX_TOKENS: u32 = 512;

/// Settings for [`GroqClient`].
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl GroqConfig {
    /// Configuration with default model, endpoint and deterministic
    /// sampling (temperature 0).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Groq API client
pub struct GroqClient {
    config: GroqConfig,
    http: Client,
}

impl GroqClient {
    /// Create a new client, failing when the API key is blank.
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        debug!("GroqClient::new: {config:?}");
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self { config, http })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the request body for the chat completions API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": request.prompt }));

        let max_tokens = request
            .max_tokens
            .map_or(self.config.max_tokens, |m| m.min(self.config.max_tokens));

        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "max_tokens": max_tokens,
        })
    }

    /// Parse the chat completions response
    fn parse_response(api_response: ChatResponse) -> Result<CompletionResponse, LlmError> {
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))?;

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("response contained no text".to_string()))?;

        let stop_reason = match choice.finish_reason.as_deref() {
            Some("length") => StopReason::MaxTokens,
            _ => StopReason::EndTurn,
        };

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: Some(content),
            stop_reason,
            usage,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.config.timeout)
        } else {
            LlmError::Network(e)
        }
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!("complete: model={} prompt_len={}", self.config.model, request.prompt.len());
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!("complete: API error {status}");
            return Err(LlmError::ApiError {
                status,
                message: api_error_message(&text),
            });
        }

        let api_response: ChatResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                LlmError::InvalidResponse(e.to_string())
            } else {
                self.map_send_error(e)
            }
        })?;

        let completion = Self::parse_response(api_response)?;
        debug!(
            "complete: success ({} input / {} output tokens)",
            completion.usage.input_tokens, completion.usage.output_tokens
        );
        Ok(completion)
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, falling back to
/// the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GroqClient {
        GroqClient::new(GroqConfig::new("test-key")).unwrap()
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(matches!(
            GroqClient::new(GroqConfig::new("  ")),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", GroqConfig::new("gsk_secret"));
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_request_body() {
        let mut request = CompletionRequest::user("Plan this");
        request.max_tokens = Some(10_000);
        let body = client().build_request_body(&request);

        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["max_tokens"], DEFAULT_MAX_TOKENS);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Plan this");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client =
            GroqClient::new(GroqConfig::new("k").with_base_url("http://localhost:9999/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn test_parse_response() {
        let api: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": "1. Pick date" },
                "finish_reason": "length"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5 }
        }))
        .unwrap();

        let parsed = GroqClient::parse_response(api).unwrap();
        assert_eq!(parsed.content.as_deref(), Some("1. Pick date"));
        assert_eq!(parsed.stop_reason, StopReason::MaxTokens);
        assert_eq!(parsed.usage.input_tokens, 12);
    }

    #[test]
    fn test_parse_response_without_text() {
        let api: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{ "message": { "content": null }, "finish_reason": "stop" }]
        }))
        .unwrap();
        assert!(matches!(
            GroqClient::parse_response(api),
            Err(LlmError::InvalidResponse(_))
        ));

        let empty: ChatResponse = serde_json::from_value(serde_json::json!({ "choices": [] })).unwrap();
        assert!(GroqClient::parse_response(empty).is_err());
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Invalid API Key");
        assert_eq!(api_error_message("upstream down\n"), "upstream down");
    }
}
