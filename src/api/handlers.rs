//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{ChatStreamRequest, ErrorResponse, MeetingsResponse};
use super::AppState;
use crate::dispatch::dispatch;
use crate::meetings::MEETINGS;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::mpsc;

/// Events buffered between the dispatcher and the response body. Word-level
/// fallback chunking keeps frames small; a shallow buffer is plenty.
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Streaming chat cycle
        .route("/api/chat/stream", post(chat_stream))
        // Static reference data for the chat page
        .route("/api/meetings", get(list_meetings))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Streaming Chat
// ============================================================

/// Run one request-response cycle and stream its events.
///
/// A malformed JSON body is rejected here, before any processing. The
/// dispatcher runs in its own task and owns the sending half; dropping the
/// response (client went away) closes the channel and stops it.
async fn chat_stream(
    State(state): State<AppState>,
    payload: Result<Json<ChatStreamRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    tracing::debug!(
        state = ?request.state,
        message_len = request.message.len(),
        "Chat stream request"
    );

    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    tokio::spawn(dispatch(
        request.message,
        request.state,
        request.report_data,
        state.provider.clone(),
        tx,
    ));

    Ok(sse_stream(rx).into_response())
}

// ============================================================
// Reference Data
// ============================================================

async fn list_meetings() -> Json<MeetingsResponse> {
    Json(MeetingsResponse {
        meetings: MEETINGS.to_vec(),
    })
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("donna ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
