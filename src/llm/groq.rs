use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::LlmProvider;
use super::error::LlmError;
use crate::config::LlmConfig;

const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
const GROQ_KEY_PREFIX: &str = "gsk_";

pub struct GroqClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    temperature: f64,
    max_tokens: u32,
}

impl GroqClient {
    /// Build the client; a missing or malformed key is reported per call, not here
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = Some(config.api_key.trim())
            .filter(|k| k.starts_with(GROQ_KEY_PREFIX))
            .map(str::to_string);

        let model = if config.model.trim().is_empty() {
            DEFAULT_GROQ_MODEL.to_string()
        } else {
            config.model.trim().to_string()
        };

        let endpoint = if config.endpoint.trim().is_empty() {
            DEFAULT_GROQ_ENDPOINT.to_string()
        } else {
            config.endpoint.trim().trim_end_matches('/').to_string()
        };

        Ok(Self {
            http: Client::builder()
                .build()
                .context("Failed to build Groq HTTP client")?,
            api_key,
            model,
            endpoint,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[cfg(test)]
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn request_body<'a>(&'a self, system_prompt: &'a str, user_prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        }
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredentials)?;

        debug!("POST {} (model={})", self.request_url(), self.model);

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(api_key)
            .json(&self.request_body(system_prompt, user_prompt))
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Request(format!("Failed to parse response: {e}")))?;

        extract_reply(payload)
    }
}

/// Map a non-success HTTP response to an error
fn classify_failure(status: StatusCode, body: &str) -> LlmError {
    if status == StatusCode::UNAUTHORIZED || body.contains("invalid_api_key") {
        return LlmError::Unauthorized;
    }
    LlmError::Request(format!("Error code: {} - {}", status.as_u16(), body.trim()))
}

fn extract_reply(payload: ChatResponse) -> Result<String, LlmError> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::Request("Response did not contain a message".to_string()))
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> LlmConfig {
        LlmConfig {
            api_key: key.to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn only_groq_shaped_keys_count_as_credentials() {
        let client = |key: &str| GroqClient::from_config(&config_with_key(key)).unwrap();

        assert!(!client("").has_credentials());
        assert!(!client("sk-abc").has_credentials());
        assert!(client(" gsk_abc ").has_credentials());
    }

    #[test]
    fn endpoint_and_model_fall_back_to_defaults() {
        let config = LlmConfig {
            model: " ".to_string(),
            endpoint: String::new(),
            ..LlmConfig::default()
        };
        let client = GroqClient::from_config(&config).unwrap();
        assert_eq!(client.model, DEFAULT_GROQ_MODEL);
        assert_eq!(
            client.request_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );

        let config = LlmConfig {
            endpoint: "http://localhost:8080/v1/".to_string(),
            ..LlmConfig::default()
        };
        let client = GroqClient::from_config(&config).unwrap();
        assert_eq!(client.request_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn request_body_carries_both_messages() {
        let client = GroqClient::from_config(&LlmConfig::default()).unwrap();
        let body = serde_json::to_value(client.request_body("sys", "usr")).unwrap();

        assert_eq!(body["model"], "llama3-8b-8192");
        assert_eq!(body["max_tokens"], 900);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "usr");
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GroqClient::from_config(&LlmConfig::default()).unwrap();
        let err = client.generate("s", "u").await.unwrap_err();
        assert_eq!(err, LlmError::MissingCredentials);
    }

    #[test]
    fn unauthorized_status_and_body_map_to_auth_error() {
        assert_eq!(
            classify_failure(StatusCode::UNAUTHORIZED, ""),
            LlmError::Unauthorized
        );
        assert_eq!(
            classify_failure(
                StatusCode::BAD_REQUEST,
                r#"{"error":{"code":"invalid_api_key"}}"#
            ),
            LlmError::Unauthorized
        );
    }

    #[test]
    fn other_failures_keep_detail() {
        match classify_failure(StatusCode::TOO_MANY_REQUESTS, "rate limited\n") {
            LlmError::Request(detail) => {
                assert_eq!(detail, "Error code: 429 - rate limited");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn reply_is_first_choice_content() {
        let payload: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Overview: ..."}},
                           {"message":{"role":"assistant","content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(payload).unwrap(), "Overview: ...");

        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(extract_reply(empty), Err(LlmError::Request(_))));
    }
}
