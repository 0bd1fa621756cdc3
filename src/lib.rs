pub mod cli;
pub mod config;
pub mod http;
pub mod llm;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use http::{create_router, AppState};
pub use llm::{build_provider, GroqClient, LlmError, LlmProvider};
pub use session::{
    LogEntry, Outcome, PromptRequest, Role, Sentinel, SessionConfig, SessionError,
    SessionStats, TranscriptAggregator,
};
