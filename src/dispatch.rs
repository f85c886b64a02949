//! Stream dispatcher
//!
//! Orchestrates one request-response cycle: run the state machine, emit the
//! state update before any text, then stream either provider fragments or
//! the deterministic reply word by word, and always terminate with exactly
//! one completion event. A closed sink means the client abandoned the
//! stream; the dispatcher stops consuming and forwards nothing further.

use crate::dialogue::{transition, DialogueState, ReportDraft};
use crate::llm::TextStreamProvider;
use crate::meetings::MEETINGS;
use crate::system_prompt::build_prompt;
use crate::wire::StreamEvent;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pacing between fallback word chunks. UX parity with incremental
/// generation only; no correctness meaning.
const FALLBACK_CHUNK_DELAY: Duration = Duration::from_millis(30);

const APOLOGY: &str = "Sorry, I had trouble responding. Please try again.";

/// Run one cycle and write its ordered event sequence to `sink`.
///
/// Event order is invariant across every path: one `StateUpdate` first,
/// zero or more `TextDelta`, one `Completion` last. The provider gets a
/// single attempt; an open failure (or no provider) substitutes the
/// deterministic reply once, and a failure after the first fragment
/// surfaces as an error-flagged completion. Never retries.
pub async fn dispatch(
    utterance: String,
    state: DialogueState,
    draft: ReportDraft,
    provider: Option<Arc<dyn TextStreamProvider>>,
    sink: mpsc::Sender<StreamEvent>,
) {
    let rule = transition(&utterance, state, &draft, MEETINGS);

    // State first, so the client can apply it even if generation fails.
    let state_update = StreamEvent::StateUpdate {
        new_state: rule.next_state,
        report_data: rule.next_draft.clone(),
    };
    if sink.send(state_update).await.is_err() {
        return;
    }

    let Some(provider) = provider else {
        stream_fallback(&rule.reply, &sink).await;
        return;
    };

    let prompt = build_prompt(&utterance, &rule, MEETINGS);
    let mut fragments = match provider.stream_text(&prompt).await {
        Ok(fragments) => fragments,
        Err(e) => {
            tracing::warn!(
                provider = provider.provider_id(),
                error = %e,
                "Provider unavailable, using deterministic reply"
            );
            stream_fallback(&rule.reply, &sink).await;
            return;
        }
    };

    let mut produced_any = false;
    loop {
        match fragments.next().await {
            Some(Ok(fragment)) => {
                if fragment.is_empty() {
                    continue;
                }
                produced_any = true;
                let delta = StreamEvent::TextDelta { content: fragment };
                if sink.send(delta).await.is_err() {
                    // Canceled: stop consuming, forward nothing further.
                    return;
                }
            }
            Some(Err(e)) if !produced_any => {
                tracing::warn!(
                    provider = provider.provider_id(),
                    error = %e,
                    "Provider failed before first fragment, using deterministic reply"
                );
                stream_fallback(&rule.reply, &sink).await;
                return;
            }
            Some(Err(e)) => {
                tracing::error!(
                    provider = provider.provider_id(),
                    error = %e,
                    "Provider stream failed mid-response"
                );
                let _ = sink
                    .send(StreamEvent::Completion {
                        content: APOLOGY.to_string(),
                        error: true,
                    })
                    .await;
                return;
            }
            None => {
                let _ = sink
                    .send(StreamEvent::Completion {
                        content: String::new(),
                        error: false,
                    })
                    .await;
                return;
            }
        }
    }
}

/// Stream the deterministic reply word by word, then complete cleanly.
async fn stream_fallback(reply: &str, sink: &mpsc::Sender<StreamEvent>) {
    let words: Vec<&str> = reply.split(' ').collect();
    let last = words.len().saturating_sub(1);

    for (index, word) in words.iter().enumerate() {
        let content = if index == last {
            (*word).to_string()
        } else {
            format!("{word} ")
        };
        if sink.send(StreamEvent::TextDelta { content }).await.is_err() {
            return;
        }
        tokio::time::sleep(FALLBACK_CHUNK_DELAY).await;
    }

    let _ = sink
        .send(StreamEvent::Completion {
            content: String::new(),
            error: false,
        })
        .await;
}
