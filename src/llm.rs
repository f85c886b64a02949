//! Generative text capability
//!
//! A provider takes a prompt and yields a lazy sequence of text fragments,
//! or fails. Concrete providers are selected once at startup from explicit
//! configuration and injected into the dispatcher; the dispatcher treats a
//! missing provider and an open failure the same way (deterministic
//! fallback, no retries).

pub mod config;
pub mod error;
pub mod gemini;
pub mod openai;

pub use config::{build_provider, LlmConfig};
pub use error::{ProviderError, ProviderErrorKind};
pub use gemini::GeminiService;
pub use openai::OpenAiService;

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Lazy sequence of response text fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// Common interface for streaming text providers
#[async_trait]
pub trait TextStreamProvider: Send + Sync {
    /// Open a fragment stream for the prompt. Errors here mean the
    /// capability is unavailable; errors on the stream itself mean it
    /// failed mid-response.
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream, ProviderError>;

    /// Stable provider identifier for logs and diagnostics.
    fn provider_id(&self) -> &'static str;
}

/// Logging wrapper for providers
pub struct LoggingProvider {
    inner: Arc<dyn TextStreamProvider>,
    provider_id: &'static str,
}

impl LoggingProvider {
    pub fn new(inner: Arc<dyn TextStreamProvider>) -> Self {
        let provider_id = inner.provider_id();
        Self { inner, provider_id }
    }
}

#[async_trait]
impl TextStreamProvider for LoggingProvider {
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream, ProviderError> {
        let start = std::time::Instant::now();
        let result = self.inner.stream_text(prompt).await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    provider = %self.provider_id,
                    open_ms = %duration.as_millis(),
                    prompt_len = prompt.len(),
                    "Provider stream opened"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.provider_id,
                    open_ms = %duration.as_millis(),
                    error = %e.message,
                    "Provider stream failed to open"
                );
            }
        }

        result
    }

    fn provider_id(&self) -> &'static str {
        self.provider_id
    }
}
