//! Donna - streaming meeting assistant backend
//!
//! A dialogue state machine that answers meeting questions and walks the
//! user through logging a structured report, with replies delivered
//! incrementally over SSE. Responses come from a configured generative
//! provider when one is available, or from deterministic word-chunked
//! fallback text otherwise.

pub mod api;
pub mod client;
pub mod dialogue;
pub mod dispatch;
pub mod llm;
pub mod meetings;
pub mod reports;
pub mod system_prompt;
pub mod wire;
