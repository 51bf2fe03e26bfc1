//! LLM request/response types.

use serde::{Deserialize, Serialize};

/// A completion request: everything needed for one LLM call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system prompt sent ahead of the user prompt
    pub system_prompt: Option<String>,

    /// The user prompt
    pub prompt: String,

    /// Max tokens for the response; the client default applies when unset
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// A request carrying only a user prompt.
    pub fn user(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            prompt: prompt.into(),
            max_tokens: None,
        }
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    #[default]
    EndTurn,
    MaxTokens,
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A completion response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionResponse {
    /// Text returned by the model, if any
    pub content: Option<String>,
    pub stop_reason: StopReason,
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// A response carrying only text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
