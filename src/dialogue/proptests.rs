//! Property-based tests for the dialogue state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::intent::is_meeting_query;
use super::state::*;
use super::transition::*;
use crate::meetings::MEETINGS;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = DialogueState> {
    prop_oneof![
        Just(DialogueState::Idle),
        Just(DialogueState::AskingClient),
        Just(DialogueState::AskingOutcome),
        Just(DialogueState::AskingNextSteps),
        Just(DialogueState::AskingSalesReps),
        Just(DialogueState::Completed),
    ]
}

fn arb_field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 ]{0,20}")
}

fn arb_draft() -> impl Strategy<Value = ReportDraft> {
    (arb_field(), arb_field(), arb_field(), arb_field()).prop_map(
        |(client, outcome, next_steps, sales_reps)| ReportDraft {
            client,
            outcome,
            next_steps,
            sales_reps,
        },
    )
}

fn arb_utterance() -> impl Strategy<Value = String> {
    prop_oneof![
        // free text
        "[a-zA-Z0-9 '?!.,]{0,60}",
        // texts guaranteed to hit the keyword branches
        Just("what's my next meeting".to_string()),
        Just("I want to log a report".to_string()),
        Just("WHEN IS the sync".to_string()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Identical inputs always yield identical outputs.
    #[test]
    fn prop_transition_is_pure(
        utterance in arb_utterance(),
        state in arb_state(),
        draft in arb_draft(),
    ) {
        let a = transition(&utterance, state, &draft, MEETINGS);
        let b = transition(&utterance, state, &draft, MEETINGS);
        prop_assert_eq!(a, b);
    }

    /// A meeting query resets to Idle with an empty draft from any state.
    #[test]
    fn prop_meeting_query_always_resets(
        state in arb_state(),
        draft in arb_draft(),
    ) {
        let result = transition("when is my meeting", state, &draft, MEETINGS);
        prop_assert_eq!(result.next_state, DialogueState::Idle);
        prop_assert!(result.next_draft.is_empty());
    }

    /// The successor state is always one the machine defines reachable from
    /// the current one; prompting states advance exactly one step unless a
    /// meeting query interrupts.
    #[test]
    fn prop_prompting_states_advance_in_order(
        utterance in arb_utterance(),
        draft in arb_draft(),
    ) {
        let steps = [
            (DialogueState::AskingClient, DialogueState::AskingOutcome),
            (DialogueState::AskingOutcome, DialogueState::AskingNextSteps),
            (DialogueState::AskingNextSteps, DialogueState::AskingSalesReps),
            (DialogueState::AskingSalesReps, DialogueState::Completed),
        ];
        for (current, successor) in steps {
            let result = transition(&utterance, current, &draft, MEETINGS);
            if is_meeting_query(&utterance) {
                prop_assert_eq!(result.next_state, DialogueState::Idle);
            } else {
                prop_assert_eq!(result.next_state, successor);
            }
        }
    }

    /// Reaching Completed through the machine implies a fully populated draft.
    #[test]
    fn prop_completed_draft_is_complete(
        client in "[a-zA-Z ]{1,20}",
        outcome in "[a-zA-Z ]{1,20}",
        next_steps in "[a-zA-Z ]{1,20}",
        sales_reps in "[0-9]{1,3}",
    ) {
        let mut state = DialogueState::Idle;
        let mut draft = ReportDraft::default();
        for utterance in ["log a report", &client, &outcome, &next_steps, &sales_reps] {
            let result = transition(utterance, state, &draft, MEETINGS);
            state = result.next_state;
            draft = result.next_draft;
        }
        // Answers containing meeting keywords interrupt the cycle instead.
        if state == DialogueState::Completed {
            prop_assert!(draft.is_complete());
        }
    }

    /// No input panics the machine, and the reply is never empty.
    #[test]
    fn prop_never_panics_reply_nonempty(
        utterance in arb_utterance(),
        state in arb_state(),
        draft in arb_draft(),
    ) {
        let result = transition(&utterance, state, &draft, MEETINGS);
        prop_assert!(!result.reply.is_empty());
    }
}
