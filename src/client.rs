//! Client-side stream reassembly
//!
//! The consuming half of the transport: feed raw reads into a conversation
//! view and it maintains the ordered turn history, the live partial text,
//! and the dialogue state carried into the next request. One stream is in
//! flight at a time; beginning a new one cancels the old one, and nothing
//! from a canceled attempt reaches the view.

use crate::dialogue::{DialogueState, ReportDraft};
use crate::reports::{ReportRecord, ReportSink};
use crate::wire::{decode_payload, FrameScanner, StreamEvent};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One immutable conversation turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    fn new(sender: Sender, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text,
            timestamp: Utc::now(),
        }
    }
}

/// Conversation view fed by raw transport reads.
pub struct Conversation {
    turns: Vec<Turn>,
    state: DialogueState,
    draft: ReportDraft,
    reports: Arc<dyn ReportSink>,

    // in-flight stream
    scanner: FrameScanner,
    partial: String,
    streaming: bool,
    completed: bool,
    state_applied: bool,
}

impl Conversation {
    pub fn new(reports: Arc<dyn ReportSink>) -> Self {
        Self {
            turns: Vec::new(),
            state: DialogueState::Idle,
            draft: ReportDraft::default(),
            reports,
            scanner: FrameScanner::new(),
            partial: String::new(),
            streaming: false,
            completed: false,
            state_applied: false,
        }
    }

    /// Ordered turn history (append-only).
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// State and draft to send with the next request.
    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// Live partial text of the in-flight assistant message.
    pub fn partial_text(&self) -> &str {
        &self.partial
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Record an outbound user message.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::new(Sender::User, text.into()));
    }

    /// Start consuming a response stream. Cancels any stream already in
    /// flight: its buffered partial text is discarded and any events it
    /// still delivers are ignored.
    pub fn begin_stream(&mut self) {
        self.scanner = FrameScanner::new();
        self.partial.clear();
        self.streaming = true;
        self.completed = false;
        self.state_applied = false;
    }

    /// Abandon the in-flight stream without finalizing a turn.
    pub fn cancel_stream(&mut self) {
        self.scanner = FrameScanner::new();
        self.partial.clear();
        self.streaming = false;
    }

    /// Feed one raw transport read; applies every event it completes.
    pub fn feed(&mut self, chunk: &[u8]) {
        if !self.streaming {
            return;
        }
        let payloads = self.scanner.push(chunk);
        for payload in payloads {
            // malformed frames are noise, never fatal
            if let Some(event) = decode_payload(&payload) {
                self.apply(event);
            }
        }
    }

    /// Transport ended without a completion event; if partial text arrived,
    /// finalize it as a turn anyway.
    pub fn finish_read(&mut self) {
        if self.streaming && !self.completed && !self.partial.is_empty() {
            self.finalize();
        }
        self.streaming = false;
    }

    fn apply(&mut self, event: StreamEvent) {
        if self.completed {
            // anything after the first completion is ignored
            return;
        }
        match event {
            StreamEvent::StateUpdate {
                new_state,
                report_data,
            } => {
                self.state = new_state;
                self.draft = report_data;
                self.state_applied = true;
            }
            StreamEvent::TextDelta { content } => {
                self.partial.push_str(&content);
            }
            StreamEvent::Completion { content, error: _ } => {
                self.partial.push_str(&content);
                self.completed = true;
                self.finalize();
            }
        }
    }

    fn finalize(&mut self) {
        let text = std::mem::take(&mut self.partial);
        self.turns.push(Turn::new(Sender::Assistant, text));
        self.streaming = false;

        // Without a state update the request's own state/draft stay in
        // effect; there is nothing to overwrite here.
        if self.state_applied
            && self.state == DialogueState::Completed
            && self.draft.client.as_deref().is_some_and(|c| !c.is_empty())
        {
            self.reports.append(ReportRecord::from_draft(&self.draft));
        }
    }
}
