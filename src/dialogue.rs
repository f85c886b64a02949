//! Report dialogue state machine
//!
//! Pure transition logic: given the user's utterance, the current dialogue
//! state, and the report fields collected so far, produce the deterministic
//! reply, the next state, and the updated draft. No I/O, no hidden state.

pub mod intent;
pub mod state;
pub mod transition;

#[cfg(test)]
mod proptests;

pub use state::{DialogueState, ReportDraft};
pub use transition::{transition, RuleReply};
