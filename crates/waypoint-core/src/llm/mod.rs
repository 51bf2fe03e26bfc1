//! LLM client module.
//!
//! Provides the [`LlmClient`] abstraction the planner talks to and the
//! [`GroqClient`] implementation for Groq's OpenAI-compatible API.

pub mod client;
mod error;
pub mod groq;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use groq::{GroqClient, GroqConfig};
pub use types::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
