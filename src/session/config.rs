use serde::{Deserialize, Serialize};

/// Tunables for the transcript aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Participant label used when `/start` carries no usable username
    #[serde(default = "default_participant")]
    pub default_participant: String,

    /// Number of most recent fragments fed to a context query
    /// Default: 30
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

fn default_participant() -> String {
    "Guest".to_string()
}

fn default_context_window() -> usize {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_participant: default_participant(),
            context_window: default_context_window(),
        }
    }
}
