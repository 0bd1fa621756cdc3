use crate::llm::LlmProvider;
use crate::session::TranscriptAggregator;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single meeting session; every state transition goes through this lock
    pub aggregator: Arc<Mutex<TranscriptAggregator>>,

    /// Chat completion provider used by `/end` and `/chat`
    pub llm: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(aggregator: TranscriptAggregator, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            aggregator: Arc::new(Mutex::new(aggregator)),
            llm,
        }
    }
}
