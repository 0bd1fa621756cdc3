use super::log::LogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the current meeting session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Identifier allocated by the most recent `start`, if any
    pub session_id: Option<String>,

    /// Whether a meeting is currently active
    pub active: bool,

    /// Participant label of the session
    pub participant: String,

    /// When the session was started
    pub started_at: Option<DateTime<Utc>>,

    /// Number of transcript fragments collected
    pub fragment_count: usize,

    /// Conversation history in insertion order
    pub conversation_log: Vec<LogEntry>,
}
