//! Completed-report handoff
//!
//! Once a dialogue cycle finalizes in `COMPLETED` with a client name, the
//! draft plus a generated id and timestamp goes to a `ReportSink`. The sink
//! is an external collaborator; this crate only defines the contract and an
//! in-memory keyed-append implementation.

use crate::dialogue::ReportDraft;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Mutex;
use uuid::Uuid;

/// A finalized meeting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub client: String,
    pub outcome: String,
    pub next_steps: String,
    pub sales_reps: String,
}

impl ReportRecord {
    /// Freeze a completed draft into a record. Missing fields become empty
    /// strings; the state machine guarantees all four are present when a
    /// cycle reaches `COMPLETED`.
    pub fn from_draft(draft: &ReportDraft) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            client: field(&draft.client),
            outcome: field(&draft.outcome),
            next_steps: field(&draft.next_steps),
            sales_reps: field(&draft.sales_reps),
        }
    }
}

/// Append-only destination for finalized reports.
pub trait ReportSink: Send + Sync {
    fn append(&self, record: ReportRecord);
}

/// In-memory report store.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    records: Mutex<Vec<ReportRecord>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ReportRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ReportSink for MemoryReportStore {
    fn append(&self, record: ReportRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_complete_draft() {
        let draft = ReportDraft {
            client: Some("Acme".into()),
            outcome: Some("Positive".into()),
            next_steps: Some("Follow up".into()),
            sales_reps: Some("5".into()),
        };
        let record = ReportRecord::from_draft(&draft);
        assert_eq!(record.client, "Acme");
        assert_eq!(record.sales_reps, "5");
    }

    #[test]
    fn test_store_appends_in_order() {
        let store = MemoryReportStore::new();
        let first = ReportRecord::from_draft(&ReportDraft {
            client: Some("A".into()),
            ..Default::default()
        });
        let second = ReportRecord::from_draft(&ReportDraft {
            client: Some("B".into()),
            ..Default::default()
        });
        store.append(first.clone());
        store.append(second.clone());

        let records = store.records();
        assert_eq!(records, vec![first, second]);
        assert_ne!(records[0].id, records[1].id);
    }
}
