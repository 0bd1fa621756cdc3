use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use super::error::LlmError;
use super::groq::GroqClient;
use crate::config::LlmConfig;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one chat completion with a system and a user message
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(config: &LlmConfig) -> Result<Box<dyn LlmProvider>> {
    match config.provider.trim().to_lowercase().as_str() {
        "groq" => Ok(Box::new(GroqClient::from_config(config)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: groq",
            other
        ),
    }
}

/// Single best-effort provider call; failures come back as display text
pub async fn generate(
    provider: &dyn LlmProvider,
    system_prompt: &str,
    user_prompt: &str,
) -> String {
    match provider.generate(system_prompt, user_prompt).await {
        Ok(text) => {
            info!("LLM reply received ({} chars)", text.len());
            text
        }
        Err(e) => {
            warn!("LLM call failed: {}", e);
            e.display_text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<String, LlmError>);

    #[async_trait]
    impl LlmProvider for Fixed {
        async fn generate(&self, _: &str, _: &str) -> Result<String, LlmError> {
            self.0.clone()
        }
    }

    #[test]
    fn unsupported_provider_returns_error() {
        let config = LlmConfig {
            provider: "unknown".to_string(),
            ..LlmConfig::default()
        };

        let err = match build_provider(&config) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn groq_provider_builds_without_api_key() {
        assert!(build_provider(&LlmConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn generate_passes_through_success() {
        let provider = Fixed(Ok("answer".to_string()));
        assert_eq!(generate(&provider, "s", "u").await, "answer");
    }

    #[tokio::test]
    async fn generate_converts_failures_to_text() {
        let provider = Fixed(Err(LlmError::Unauthorized));
        assert!(generate(&provider, "s", "u").await.starts_with("[AUTH]"));

        let provider = Fixed(Err(LlmError::Request("boom".to_string())));
        assert_eq!(generate(&provider, "s", "u").await, "[Groq Error] boom");
    }
}
