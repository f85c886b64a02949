//! Google Gemini streaming provider
//!
//! `streamGenerateContent` with `alt=sse`; candidate parts arrive as SSE
//! frames reassembled by the shared `FrameScanner`.

use super::error::{classify_status, classify_transport};
use super::{FragmentStream, ProviderError, TextStreamProvider};
use crate::wire::FrameScanner;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_NAME: &str = "gemini-2.5-flash";

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiService {
    pub fn new(api_key: String) -> Self {
        let base_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{API_NAME}:streamGenerateContent"
        );
        Self::with_base_url(api_key, base_url)
    }

    /// Endpoint override for tests.
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
impl TextStreamProvider for GeminiService {
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream, ProviderError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiRequestPart { text: prompt }],
            }],
        };

        let url = format!("{}?alt=sse&key={}", self.base_url, self.api_key);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<GeminiErrorResponse>(&body)
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
                    .filter_map(|payload| parse_chunk(payload))
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
        "gemini"
    }
}

/// Join the text parts of the first candidate in one stream frame. Frames
/// with no text or that fail to parse are skipped.
fn parse_chunk(payload: &str) -> Option<String> {
    let chunk: GeminiStreamChunk = serde_json::from_str(payload).ok()?;
    let candidate = chunk.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiRequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiRequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiStreamChunk {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiCandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
