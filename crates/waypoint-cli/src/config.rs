//! LLM configuration resolved from flags, environment and `.env`.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use waypoint_core::{
    llm::groq::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS},
    GroqConfig,
};

/// LLM connection settings shared by commands that plan tasks.
#[derive(Args, Clone)]
pub struct LlmArgs {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    /// Model used for planning
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible Groq API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub groq_base_url: String,

    /// Seconds to wait for the LLM before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub llm_timeout_secs: u64,
}

impl LlmArgs {
    /// Builds the client configuration, requiring an API key.
    pub fn groq_config(&self) -> Result<GroqConfig> {
        let api_key = match self.groq_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!("GROQ_API_KEY is not set; export it or pass --groq-api-key"),
        };

        Ok(GroqConfig::new(api_key)
            .with_model(self.model.clone())
            .with_base_url(self.groq_base_url.clone())
            .with_timeout(Duration::from_secs(self.llm_timeout_secs)))
    }
}
