//! Provider error types

use thiserror::Error;

/// Provider error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Network, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::ServerError, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Auth, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unknown, message)
    }
}

/// Error classification for logging and diagnostics.
///
/// The dispatcher never retries; a failure before the first fragment falls
/// back once, a failure after it surfaces to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Network issues, timeouts
    Network,
    /// Rate limited (429)
    RateLimit,
    /// Server error (5xx)
    ServerError,
    /// Authentication failed (401, 403)
    Auth,
    /// Bad request (400)
    InvalidRequest,
    /// Unknown error
    Unknown,
}

/// Map a non-success HTTP status plus error detail onto a classified error.
pub fn classify_status(status: reqwest::StatusCode, message: &str) -> ProviderError {
    match status.as_u16() {
        400 => ProviderError::invalid_request(format!("Invalid request: {message}")),
        401 | 403 => ProviderError::auth(format!("Authentication failed: {message}")),
        429 => ProviderError::rate_limit(format!("Rate limit exceeded: {message}")),
        500..=599 => ProviderError::server_error(format!("Server error: {message}")),
        _ => ProviderError::unknown(format!("HTTP {status}: {message}")),
    }
}

/// Map a reqwest transport failure onto a classified error.
pub fn classify_transport(e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::network(format!("Request timeout: {e}"))
    } else if e.is_connect() {
        ProviderError::network(format!("Connection failed: {e}"))
    } else {
        ProviderError::unknown(format!("Request failed: {e}"))
    }
}
