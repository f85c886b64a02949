//! API request and response types

use crate::dialogue::{DialogueState, ReportDraft};
use crate::meetings::Meeting;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound body for a streaming chat request.
///
/// `state` defaults to `IDLE` when absent; `reportData` that is absent or
/// not an object of strings collapses to an empty draft. A body that is not
/// valid JSON (or carries an unknown `state` name) is rejected upstream.
#[derive(Debug, Deserialize)]
pub struct ChatStreamRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub state: DialogueState,
    #[serde(
        default,
        rename = "reportData",
        deserialize_with = "lenient_report_data"
    )]
    pub report_data: ReportDraft,
}

fn lenient_report_data<'de, D>(deserializer: D) -> Result<ReportDraft, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Response with the static meeting schedule
#[derive(Debug, Serialize)]
pub struct MeetingsResponse {
    pub meetings: Vec<Meeting>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
