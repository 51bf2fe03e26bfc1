//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client: each call is independent.
///
/// No conversation state is kept between calls, and implementations do not
/// retry on their own.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request and wait for the full answer.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
