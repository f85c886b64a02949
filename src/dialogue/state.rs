//! Dialogue state and report draft types

use serde::{Deserialize, Serialize};

/// Current step of the report-logging flow.
///
/// `Idle` is both the initial state and the landing state after any meeting
/// lookup. `Completed` is terminal for one report cycle; a later report
/// trigger starts a fresh cycle from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogueState {
    #[default]
    Idle,
    AskingClient,
    AskingOutcome,
    AskingNextSteps,
    AskingSalesReps,
    Completed,
}

/// Report fields collected so far.
///
/// Accumulated one field per prompting state; empty outside a report cycle.
/// All four fields are present exactly when the state reaches `Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_reps: Option<String>,
}

impl ReportDraft {
    pub fn is_empty(&self) -> bool {
        self.client.is_none()
            && self.outcome.is_none()
            && self.next_steps.is_none()
            && self.sales_reps.is_none()
    }

    /// All four fields collected.
    pub fn is_complete(&self) -> bool {
        self.client.is_some()
            && self.outcome.is_some()
            && self.next_steps.is_some()
            && self.sales_reps.is_some()
    }
}
