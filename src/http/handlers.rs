use super::state::AppState;
use crate::llm;
use crate::session::{Outcome, SessionError, SessionStats};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StartRequest {
    /// Participant label; blank or missing falls back to the configured default
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranscribeRequest {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub status: String,
    pub user: String,
    pub t: String,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub meeting_active: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Parse a JSON body, treating a missing or malformed body as `{}`
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed request body: {}", e);
            T::default()
        }
    }
}

/// Resolve an outcome into reply text, calling the provider when a prompt was built
async fn resolve(state: &AppState, outcome: Outcome) -> String {
    match outcome {
        Outcome::Sentinel(sentinel) => sentinel.message().to_string(),
        Outcome::Prompt(request) => {
            let reply = llm::generate(
                state.llm.as_ref(),
                request.system_prompt,
                &request.user_prompt,
            )
            .await;

            state
                .aggregator
                .lock()
                .await
                .record_reply(request.session_id.as_deref(), reply.clone());
            reply
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /start
/// Start a new meeting, discarding any previous transcript
pub async fn start_meeting(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: StartRequest = parse_body(&body);

    let started = {
        let mut aggregator = state.aggregator.lock().await;
        aggregator.start(req.username.as_deref().unwrap_or_default())
    };

    info!("Started {} for {}", started.session_id, started.participant_label);

    (
        StatusCode::OK,
        Json(StartResponse {
            status: "started".to_string(),
            user: started.participant_label,
            t: started.timestamp,
        }),
    )
}

/// POST /transcribe
/// Append a transcribed fragment to the active meeting
pub async fn transcribe(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: TranscribeRequest = parse_body(&body);

    let result = {
        let mut aggregator = state.aggregator.lock().await;
        aggregator.append_fragment(req.text.as_deref().unwrap_or_default())
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(OkResponse { ok: true })).into_response(),
        Err(e @ SessionError::Inactive) => {
            warn!("Rejected fragment: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// POST /end
/// End the meeting and generate the executive summary
pub async fn end_meeting(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = state.aggregator.lock().await.end();

    let summary = resolve(&state, outcome).await;
    info!("Summary ready ({} chars)", summary.len());

    (StatusCode::OK, Json(SummaryResponse { summary }))
}

/// POST /chat
/// Answer a question from the most recent transcript fragments
pub async fn chat(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: ChatRequest = parse_body(&body);

    let outcome = state
        .aggregator
        .lock()
        .await
        .build_context_query(req.query.as_deref().unwrap_or_default());

    let reply = resolve(&state, outcome).await;

    (StatusCode::OK, Json(ReplyResponse { reply }))
}

/// GET /history
/// Snapshot of the current session and its conversation log
pub async fn get_history(State(state): State<AppState>) -> impl IntoResponse {
    let stats: SessionStats = state.aggregator.lock().await.stats();
    (StatusCode::OK, Json(stats))
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let meeting_active = state.aggregator.lock().await.is_active();
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            meeting_active,
        }),
    )
}
