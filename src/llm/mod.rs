//! LLM provider boundary
//!
//! Sends system/user prompt pairs to an OpenAI-compatible chat completions API (Groq).
//! Provider failures are typed (`LlmError`) and only turned into display strings by
//! [`generate`], which never fails.

mod client;
mod error;
mod groq;

pub use client::{build_provider, generate, LlmProvider};
pub use error::LlmError;
pub use groq::GroqClient;
