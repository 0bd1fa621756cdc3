use anyhow::{Context, Result};
use serde::Deserialize;

use crate::session::SessionConfig;

/// Environment variable prefix for layered overrides, e.g. `LIVEASSIST__SERVICE__HTTP__PORT`
const ENV_PREFIX: &str = "LIVEASSIST";

/// Fallback source for the provider key when no layer sets `llm.api_key`
const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            api_key: String::new(),
            model: "llama3-8b-8192".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            temperature: 0.5,
            max_tokens: 900,
        }
    }
}

impl Config {
    /// Load defaults, then the optional file at `path` (extension inferred), then environment
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "liveassist")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 5000)?
            .set_default("llm.provider", "groq")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "llama3-8b-8192")?
            .set_default("llm.endpoint", "https://api.groq.com/openai/v1")?
            .set_default("llm.temperature", 0.5)?
            .set_default("llm.max_tokens", 900)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        let mut cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        cfg.apply_env_overrides();

        Ok(cfg)
    }

    /// Fill the API key from `GROQ_API_KEY` when no layer provided one
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(GROQ_API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.http.bind, self.service.http.port)
    }
}
