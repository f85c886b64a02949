//! `OpenAI` streaming provider
//!
//! Chat-completions endpoint with `stream: true`; deltas arrive as SSE
//! frames that the shared `FrameScanner` reassembles, terminated by a
//! `[DONE]` marker frame.

use super::error::{classify_status, classify_transport};
use super::{FragmentStream, ProviderError, TextStreamProvider};
use crate::wire::FrameScanner;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MODEL: &str = "gpt-4o-mini";
const DONE_MARKER: &str = "[DONE]";

/// `OpenAI` service implementation
pub struct OpenAiService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiService {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Endpoint override for tests and OpenAI-compatible gateways.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl TextStreamProvider for OpenAiService {
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream, ProviderError> {
        let request = OpenAiRequest {
            model: MODEL,
            stream: true,
            messages: vec![OpenAiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<OpenAiErrorResponse>(&body)
                .map_or(body, |e| e.error.message);
            return Err(classify_status(status, &detail));
        }

        let mut scanner = FrameScanner::new();
        let fragments = response
            .bytes_stream()
            .map(move |read| match read {
                Ok(bytes) => scanner
                    .push(&bytes)
                    .iter()
                    .filter_map(|payload| parse_delta(payload))
                    .map(Ok)
                    .collect(),
                Err(e) => vec![Err(ProviderError::network(format!(
                    "Stream read failed: {e}"
                )))],
            })
            .flat_map(futures::stream::iter);

        Ok(Box::pin(fragments))
    }

    fn provider_id(&self) -> &'static str {
        "openai"
    }
}

/// Extract the delta text from one stream frame, skipping the `[DONE]`
/// marker, frames without content, and frames that fail to parse.
fn parse_delta(payload: &str) -> Option<String> {
    if payload == DONE_MARKER {
        return None;
    }
    let chunk: OpenAiStreamChunk = serde_json::from_str(payload).ok()?;
    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.delta.content)
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<OpenAiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiStreamChunk {
    #[serde(default)]
    choices: Vec<OpenAiStreamChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiStreamChoice {
    delta: OpenAiDelta,
}

#[derive(Debug, Deserialize)]
struct OpenAiDelta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiError,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    message: String,
}
