//! Property-based tests for the transport codec
//!
//! The decode loop must reconstruct any encoded event sequence regardless of
//! how the transport splits the byte stream, and must survive injected junk
//! frames without dropping the surrounding events.

use super::*;
use crate::dialogue::{DialogueState, ReportDraft};
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

fn arb_draft() -> impl Strategy<Value = ReportDraft> {
    (
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
    )
        .prop_map(|(client, outcome)| ReportDraft {
            client,
            outcome,
            ..Default::default()
        })
}

// Delta text may contain anything except nothing; the codec must not care
// about newlines or unicode inside the JSON payload.
fn arb_event() -> impl Strategy<Value = StreamEvent> {
    prop_oneof![
        (arb_state(), arb_draft()).prop_map(|(new_state, report_data)| {
            StreamEvent::StateUpdate {
                new_state,
                report_data,
            }
        }),
        "[a-zA-Z0-9 .,!?'\\n\u{e9}\u{4e16}]{0,24}".prop_map(|content| StreamEvent::TextDelta { content }),
        ("[a-zA-Z .]{0,16}", any::<bool>())
            .prop_map(|(content, error)| StreamEvent::Completion { content, error }),
    ]
}

fn split_at_offsets(bytes: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for cut in cuts {
        let cut = start + (cut % 11) + 1;
        if cut >= bytes.len() {
            break;
        }
        chunks.push(bytes[start..cut].to_vec());
        start = cut;
    }
    chunks.push(bytes[start..].to_vec());
    chunks
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Encode-then-decode reconstructs the event sequence for any split of
    /// the byte stream, including splits inside delimiters and multi-byte
    /// UTF-8 sequences.
    #[test]
    fn prop_round_trip_arbitrary_splits(
        events in proptest::collection::vec(arb_event(), 0..8),
        cuts in proptest::collection::vec(0usize..1024, 0..64),
    ) {
        let encoded: String = events.iter().map(encode_frame).collect();

        let mut scanner = FrameScanner::new();
        let mut decoded = Vec::new();
        for chunk in split_at_offsets(encoded.as_bytes(), &cuts) {
            for payload in scanner.push(&chunk) {
                decoded.extend(decode_payload(&payload));
            }
        }

        prop_assert_eq!(decoded, events);
        prop_assert_eq!(scanner.pending(), 0);
    }

    /// A malformed frame anywhere in the stream is skipped without
    /// disturbing the frames around it.
    #[test]
    fn prop_junk_frame_does_not_abort_stream(
        before in proptest::collection::vec(arb_event(), 0..4),
        after in proptest::collection::vec(arb_event(), 0..4),
        junk in "[a-z{}\\[]{1,16}",
    ) {
        let mut encoded: String = before.iter().map(encode_frame).collect();
        encoded.push_str(&format!("data: {junk}\n\n"));
        encoded.push_str(&after.iter().map(encode_frame).collect::<String>());

        let mut scanner = FrameScanner::new();
        let decoded: Vec<StreamEvent> = scanner
            .push(encoded.as_bytes())
            .iter()
            .filter_map(|p| decode_payload(p))
            .collect();

        let mut expected = before;
        // junk may coincidentally parse into a valid event shape; anything
        // else must vanish without taking neighbors with it
        let junk_decoded = decode_payload(&junk);
        expected.extend(junk_decoded);
        expected.extend(after);
        prop_assert_eq!(decoded, expected);
    }
}
