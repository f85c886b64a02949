//! Provider selection from explicit configuration
//!
//! `AI_PROVIDER` names the provider (`gemini` or `openai`); the matching API
//! key must be present, otherwise the capability counts as unavailable and
//! every response takes the deterministic fallback path.

use super::{GeminiService, LoggingProvider, OpenAiService, TextStreamProvider};
use std::sync::Arc;

/// Configuration for the generative capability
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Provider name from `AI_PROVIDER`
    pub provider: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("AI_PROVIDER").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
        }
    }
}

/// Build the configured provider, wrapped with logging.
///
/// `None` when no provider is selected or its credential is missing; the
/// caller treats both identically ("capability unavailable").
pub fn build_provider(config: &LlmConfig) -> Option<Arc<dyn TextStreamProvider>> {
    let provider = config.provider.as_deref()?.to_lowercase();
    let service: Arc<dyn TextStreamProvider> = match provider.as_str() {
        "gemini" => {
            let api_key = non_empty(config.gemini_api_key.as_deref())?;
            Arc::new(GeminiService::new(api_key))
        }
        "openai" => {
            let api_key = non_empty(config.openai_api_key.as_deref())?;
            Arc::new(OpenAiService::new(api_key))
        }
        _ => return None,
    };
    Some(Arc::new(LoggingProvider::new(service)))
}

fn non_empty(key: Option<&str>) -> Option<String> {
    key.filter(|k| !k.is_empty()).map(str::to_string)
}
