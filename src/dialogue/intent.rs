//! Intent classification via fixed keyword lists
//!
//! Matching is case-insensitive substring containment. No tokenization, no
//! stemming; a sentence that merely contains a keyword matches on purpose.

const MEETING_KEYWORDS: &[&str] = &[
    "meeting",
    "next meeting",
    "upcoming meeting",
    "what is my next meeting",
    "my next meeting",
    "when is my meeting",
    "schedule",
    "calendar",
    "appointment",
    "when is",
    "what time",
];

const REPORT_KEYWORDS: &[&str] = &[
    "log a report",
    "log report",
    "create report",
    "meeting report",
    "log meeting",
    "i want to log",
];

fn contains_any(utterance: &str, keywords: &[&str]) -> bool {
    let normalized = utterance.to_lowercase();
    keywords.iter().any(|k| normalized.contains(k))
}

/// True if the utterance asks about scheduled meetings.
pub fn is_meeting_query(utterance: &str) -> bool {
    contains_any(utterance, MEETING_KEYWORDS)
}

/// True if the utterance asks to start logging a meeting report.
pub fn is_report_trigger(utterance: &str) -> bool {
    contains_any(utterance, REPORT_KEYWORDS)
}
