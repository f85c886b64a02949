//! Chunked transport codec
//!
//! One stream event per frame, framed as `data: <JSON>\n\n` UTF-8 text.
//! Field shapes match the client contract exactly:
//! `{type:"state", newState, reportData}` for state updates,
//! `{content, done:false}` for deltas, `{content, done:true, error?}` for
//! completion. The decode side is an incremental accumulator that tolerates
//! frames split at arbitrary byte offsets and skips malformed frames.

pub mod scanner;

#[cfg(test)]
mod proptests;

use crate::dialogue::{DialogueState, ReportDraft};
use serde_json::{json, Value};

pub use scanner::FrameScanner;

/// One discrete unit of a streaming response.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Resulting dialogue state and draft; always the first event of a cycle.
    StateUpdate {
        new_state: DialogueState,
        report_data: ReportDraft,
    },
    /// Incremental response text.
    TextDelta { content: String },
    /// Terminal event; always last, exactly one per cycle.
    Completion { content: String, error: bool },
}

impl StreamEvent {
    /// Wire representation of this event.
    pub fn to_json(&self) -> Value {
        match self {
            StreamEvent::StateUpdate {
                new_state,
                report_data,
            } => json!({
                "type": "state",
                "newState": new_state,
                "reportData": report_data,
            }),
            StreamEvent::TextDelta { content } => json!({
                "content": content,
                "done": false,
            }),
            StreamEvent::Completion { content, error } => {
                if *error {
                    json!({ "content": content, "done": true, "error": true })
                } else {
                    json!({ "content": content, "done": true })
                }
            }
        }
    }

    /// Classify a parsed frame payload by shape. `None` for unrecognized
    /// shapes (treated as frame noise by callers).
    pub fn from_json(value: &Value) -> Option<Self> {
        if value.get("type").and_then(Value::as_str) == Some("state") {
            let new_state =
                serde_json::from_value(value.get("newState")?.clone()).ok()?;
            let report_data = value
                .get("reportData")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            return Some(StreamEvent::StateUpdate {
                new_state,
                report_data,
            });
        }

        let content = value
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        match value.get("done").and_then(Value::as_bool)? {
            false => Some(StreamEvent::TextDelta { content }),
            true => Some(StreamEvent::Completion {
                content,
                error: value
                    .get("error")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            }),
        }
    }
}

/// Serialize one event into its wire frame.
pub fn encode_frame(event: &StreamEvent) -> String {
    format!("data: {}\n\n", event.to_json())
}

/// Parse one frame payload into a typed event. Malformed JSON or an
/// unrecognized shape yields `None`; callers skip such frames without
/// aborting the stream.
pub fn decode_payload(payload: &str) -> Option<StreamEvent> {
    let value: Value = serde_json::from_str(payload).ok()?;
    StreamEvent::from_json(&value)
}
