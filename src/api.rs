//! HTTP API for the Donna assistant

pub mod handlers;
pub mod sse;
pub mod types;

pub use handlers::create_router;

use crate::llm::TextStreamProvider;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Configured generative provider, if any. `None` means every response
    /// takes the deterministic fallback path.
    pub provider: Option<Arc<dyn TextStreamProvider>>,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn TextStreamProvider>>) -> Self {
        Self { provider }
    }
}
