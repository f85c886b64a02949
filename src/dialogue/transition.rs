//! Pure dialogue transition function
//!
//! Branch priority per call:
//! 1. meeting lookup (any state; interrupts and discards an in-flight draft)
//! 2. report trigger (only from `Idle`)
//! 3. dispatch on the current prompting state
//! 4. help message otherwise
//!
//! No branch fails. Unrecognized input while a prompt is pending is taken
//! verbatim as the answer to that prompt.

use super::intent::{is_meeting_query, is_report_trigger};
use super::state::{DialogueState, ReportDraft};
use crate::meetings::{format_meeting_reply, next_meeting, Meeting};

pub const HELP_REPLY: &str = "I'm Donna, your meeting assistant. Ask about upcoming meetings \
     or say 'I want to log a report' to record a meeting summary.";

/// Result of one transition: the deterministic reply plus the successor
/// `(state, draft)` pair the caller carries into the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReply {
    pub reply: String,
    pub next_state: DialogueState,
    pub next_draft: ReportDraft,
}

impl RuleReply {
    fn idle(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            next_state: DialogueState::Idle,
            next_draft: ReportDraft::default(),
        }
    }
}

/// Pure transition function.
///
/// Given the same `(utterance, state, draft)` this always produces the same
/// result, with no side effects.
pub fn transition(
    utterance: &str,
    state: DialogueState,
    draft: &ReportDraft,
    meetings: &[Meeting],
) -> RuleReply {
    // Meeting lookup wins over everything, including an in-progress cycle.
    if is_meeting_query(utterance) {
        let reply = match next_meeting(meetings) {
            Some(meeting) => format_meeting_reply(meeting),
            None => "You have no meetings scheduled today.".to_string(),
        };
        return RuleReply::idle(reply);
    }

    if is_report_trigger(utterance) && state == DialogueState::Idle {
        return RuleReply {
            reply: "Happy to log that. Who did you meet with?".to_string(),
            next_state: DialogueState::AskingClient,
            next_draft: ReportDraft::default(),
        };
    }

    match state {
        DialogueState::AskingClient => RuleReply {
            reply: format!("Got it, {utterance}. What was the main outcome?"),
            next_state: DialogueState::AskingOutcome,
            next_draft: ReportDraft {
                client: Some(utterance.to_string()),
                ..draft.clone()
            },
        },
        DialogueState::AskingOutcome => RuleReply {
            reply: "Great. What are the next steps?".to_string(),
            next_state: DialogueState::AskingNextSteps,
            next_draft: ReportDraft {
                outcome: Some(utterance.to_string()),
                ..draft.clone()
            },
        },
        DialogueState::AskingNextSteps => RuleReply {
            reply: "Understood. How many sales reps do they have?".to_string(),
            next_state: DialogueState::AskingSalesReps,
            next_draft: ReportDraft {
                next_steps: Some(utterance.to_string()),
                ..draft.clone()
            },
        },
        DialogueState::AskingSalesReps => {
            let final_draft = ReportDraft {
                sales_reps: Some(utterance.to_string()),
                ..draft.clone()
            };
            RuleReply {
                reply: format_summary(&final_draft),
                next_state: DialogueState::Completed,
                next_draft: final_draft,
            }
        }
        // Idle with no trigger match, or a finished cycle
        DialogueState::Idle | DialogueState::Completed => RuleReply::idle(HELP_REPLY),
    }
}

fn format_summary(draft: &ReportDraft) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    format!(
        "Thank you! Here's the summary of your meeting report:\n\n\
         **Client:** {}\n\
         **Outcome:** {}\n\
         **Next Steps:** {}\n\
         **Sales Reps:** {}\n\n\
         Your report has been logged successfully!",
        field(&draft.client),
        field(&draft.outcome),
        field(&draft.next_steps),
        field(&draft.sales_reps),
    )
}
