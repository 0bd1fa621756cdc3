use thiserror::Error;

/// Failure modes of a provider call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// No usable API key was configured
    #[error("API key is missing or invalid")]
    MissingCredentials,

    /// The provider rejected the API key
    #[error("API key was rejected by the provider")]
    Unauthorized,

    /// Any other transport, status or decoding failure
    #[error("{0}")]
    Request(String),
}

impl LlmError {
    /// User-facing text returned in place of generated content
    pub fn display_text(&self) -> String {
        match self {
            LlmError::MissingCredentials => "[CONFIG] Groq API key is missing or invalid. \
Set GROQ_API_KEY (or llm.api_key in the config file) to your real key."
                .to_string(),
            LlmError::Unauthorized => {
                "[AUTH] Invalid Groq API key. Please set a valid key and restart.".to_string()
            }
            LlmError::Request(detail) => format!("[Groq Error] {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_prefixes() {
        assert!(LlmError::MissingCredentials
            .display_text()
            .starts_with("[CONFIG] "));
        assert_eq!(
            LlmError::Unauthorized.display_text(),
            "[AUTH] Invalid Groq API key. Please set a valid key and restart."
        );
        assert_eq!(
            LlmError::Request("connection refused".to_string()).display_text(),
            "[Groq Error] connection refused"
        );
    }
}
