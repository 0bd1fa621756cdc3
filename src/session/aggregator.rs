use super::config::SessionConfig;
use super::log::{utc_timestamp, LogEntry, Role};
use super::prompts;
use super::stats::SessionStats;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

const NO_TRANSCRIPT_MESSAGE: &str =
    "No audio captured. Make sure Virtual Cable / Stereo Mix is selected, then try again.";
const EMPTY_QUERY_MESSAGE: &str = "Type a question first.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No active meeting")]
    Inactive,
}

/// Result of a successful `start`
#[derive(Debug, Clone)]
pub struct SessionStarted {
    pub session_id: String,
    pub participant_label: String,
    /// ISO-8601 UTC, second precision
    pub timestamp: String,
}

/// A system/user prompt pair ready to be sent to the LLM provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Session the prompt was built from; the reply is only recorded into that session
    pub session_id: Option<String>,
    pub system_prompt: &'static str,
    pub user_prompt: String,
}

/// Fixed responses returned for degenerate input without contacting the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// `end` found nothing in the transcript
    NoTranscript,
    /// `build_context_query` got a blank question
    EmptyQuery,
}

impl Sentinel {
    pub fn message(&self) -> &'static str {
        match self {
            Sentinel::NoTranscript => NO_TRANSCRIPT_MESSAGE,
            Sentinel::EmptyQuery => EMPTY_QUERY_MESSAGE,
        }
    }
}

/// What the caller should do next after `end` or `build_context_query`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send the prompt to the provider, then hand the reply to `record_reply`
    Prompt(PromptRequest),
    /// Return the sentinel message as-is
    Sentinel(Sentinel),
}

/// State of the single meeting session
#[derive(Debug, Default)]
struct Session {
    id: Option<String>,
    started_at: Option<DateTime<Utc>>,
    active: bool,
    participant_label: String,
    transcript_fragments: Vec<String>,
    conversation_log: Vec<LogEntry>,
}

/// Owns the one meeting session and builds prompts from its transcript
///
/// Starting a session discards the previous one. Ending a session only clears the
/// active flag: fragments survive, so a repeated `end` summarizes the same transcript.
#[derive(Debug)]
pub struct TranscriptAggregator {
    config: SessionConfig,
    session: Session,
}

impl TranscriptAggregator {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            session: Session::default(),
        }
    }

    /// Start a new session, discarding any previous state
    pub fn start(&mut self, participant_label: &str) -> SessionStarted {
        let trimmed = participant_label.trim();
        let participant_label = if trimmed.is_empty() {
            self.config.default_participant.clone()
        } else {
            trimmed.to_string()
        };

        let session_id = format!("meeting-{}", uuid::Uuid::new_v4());

        if self.session.active {
            warn!(
                "Discarding active session {:?} ({} fragments)",
                self.session.id,
                self.session.transcript_fragments.len()
            );
        }

        self.session = Session {
            id: Some(session_id.clone()),
            started_at: Some(Utc::now()),
            active: true,
            participant_label: participant_label.clone(),
            transcript_fragments: Vec::new(),
            conversation_log: Vec::new(),
        };

        info!("Meeting started: {} (participant: {})", session_id, participant_label);

        SessionStarted {
            session_id,
            participant_label,
            timestamp: utc_timestamp(),
        }
    }

    /// Append a transcribed fragment; blank fragments are accepted and ignored
    pub fn append_fragment(&mut self, text: &str) -> Result<(), SessionError> {
        if !self.session.active {
            return Err(SessionError::Inactive);
        }

        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.session.transcript_fragments.push(text.to_string());
        self.session
            .conversation_log
            .push(LogEntry::now(Role::User, text));

        debug!(
            "Fragment #{}: {}",
            self.session.transcript_fragments.len(),
            text
        );

        Ok(())
    }

    /// End the session and build the summary prompt from the full transcript
    pub fn end(&mut self) -> Outcome {
        self.session.active = false;

        let transcript = self.session.transcript_fragments.join(" ");
        let transcript = transcript.trim();

        info!(
            "Meeting ended: {:?} ({} fragments)",
            self.session.id,
            self.session.transcript_fragments.len()
        );

        if transcript.is_empty() {
            return Outcome::Sentinel(Sentinel::NoTranscript);
        }

        Outcome::Prompt(PromptRequest {
            session_id: self.session.id.clone(),
            system_prompt: prompts::SUMMARY_SYSTEM_PROMPT,
            user_prompt: prompts::build_summary_prompt(transcript),
        })
    }

    /// Build a question prompt from the most recent fragments
    pub fn build_context_query(&self, query: &str) -> Outcome {
        let query = query.trim();
        if query.is_empty() {
            return Outcome::Sentinel(Sentinel::EmptyQuery);
        }

        let context = self.recent_context();
        debug!("Context query over {} chars: {}", context.len(), query);

        Outcome::Prompt(PromptRequest {
            session_id: self.session.id.clone(),
            system_prompt: prompts::CONTEXT_SYSTEM_PROMPT,
            user_prompt: prompts::build_context_prompt(&context, query),
        })
    }

    /// Record a generated summary or answer as an assistant entry
    ///
    /// Replies for a session that has since been replaced by `start` are dropped.
    /// Returns whether the reply was recorded.
    pub fn record_reply(&mut self, session_id: Option<&str>, content: impl Into<String>) -> bool {
        if self.session.id.as_deref() != session_id {
            warn!(
                "Dropping reply for stale session {:?} (current: {:?})",
                session_id, self.session.id
            );
            return false;
        }

        self.session
            .conversation_log
            .push(LogEntry::now(Role::Assistant, content));
        true
    }

    /// Last `context_window` fragments joined by single spaces
    fn recent_context(&self) -> String {
        let fragments = &self.session.transcript_fragments;
        let skip = fragments.len().saturating_sub(self.config.context_window);
        fragments[skip..].join(" ")
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    pub fn participant_label(&self) -> &str {
        &self.session.participant_label
    }

    pub fn transcript_fragments(&self) -> &[String] {
        &self.session.transcript_fragments
    }

    pub fn conversation_log(&self) -> &[LogEntry] {
        &self.session.conversation_log
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            session_id: self.session.id.clone(),
            active: self.session.active,
            participant: self.session.participant_label.clone(),
            started_at: self.session.started_at,
            fragment_count: self.session.transcript_fragments.len(),
            conversation_log: self.session.conversation_log.clone(),
        }
    }
}

impl Default for TranscriptAggregator {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
