//! Prompt composition for the generative path
//!
//! The prompt carries everything the provider needs in one shot: the fixed
//! persona instruction, today's meetings, the state machine's resulting
//! state and draft, and the raw utterance. The deterministic reply from the
//! transition stays available as a fallback whether or not this prompt is
//! ever sent.

use crate::dialogue::RuleReply;
use crate::meetings::Meeting;
use std::fmt::Write;

const SYSTEM_INSTRUCTION: &str = "You are Donna, a professional sales assistant.\n\
     Keep responses short, structured, and helpful.\n\
     If the user is logging a meeting report, ask guiding questions.";

/// Build the outbound generative-text prompt. Pure; no failure mode.
pub fn build_prompt(utterance: &str, rule_result: &RuleReply, meetings: &[Meeting]) -> String {
    let mut meeting_summary = String::from("Available meetings today:");
    for meeting in meetings {
        let _ = write!(
            meeting_summary,
            "\n- {} with {} from {} (Topic: {})",
            meeting.time, meeting.client, meeting.company, meeting.topic
        );
    }

    let state = serde_json::to_string(&rule_result.next_state).unwrap_or_default();
    let draft = serde_json::to_string(&rule_result.next_draft).unwrap_or_default();

    format!(
        "{SYSTEM_INSTRUCTION}\n\n{meeting_summary}\n\n\
         Current report logging state: {state}\n\
         Collected report data: {draft}\n\n\
         User: {utterance}"
    )
}
