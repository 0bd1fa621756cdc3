//! HTTP API for the meeting assistant front-end
//!
//! - POST /start - Start a new meeting (resets transcript and history)
//! - POST /transcribe - Append a transcribed fragment
//! - POST /end - End the meeting and generate an executive summary
//! - POST /chat - Ask a question against the recent transcript
//! - GET /history - Session snapshot with the conversation log
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
