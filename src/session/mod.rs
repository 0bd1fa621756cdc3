//! Meeting session state
//!
//! This module provides the `TranscriptAggregator` that owns the single meeting session:
//! - Session lifecycle (start / end, active flag, participant label)
//! - Ordered transcript fragments (the canonical transcript)
//! - Append-only conversation log of fragments and generated replies
//! - Summary and context-question prompt construction

mod aggregator;
mod config;
mod log;
pub mod prompts;
mod stats;

pub use aggregator::{
    Outcome, PromptRequest, Sentinel, SessionError, SessionStarted, TranscriptAggregator,
};
pub use config::SessionConfig;
pub use log::{utc_timestamp, LogEntry, Role};
pub use stats::SessionStats;
