//! Static meeting reference data
//!
//! Read-only records the assistant answers lookup questions from. Times are
//! 24h `HH:MM` strings; ordering compares them as the integer `HHMM`.

use serde::Serialize;

/// A scheduled meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub id: &'static str,
    /// 24h wall-clock time, `HH:MM`
    pub time: &'static str,
    pub client: &'static str,
    pub company: &'static str,
    pub topic: &'static str,
}

/// Today's meetings (static reference data)
pub const MEETINGS: &[Meeting] = &[
    Meeting {
        id: "1",
        time: "14:00",
        client: "Faruk Bey",
        company: "Artevelde University",
        topic: "Donna POC",
    },
    Meeting {
        id: "2",
        time: "11:00",
        client: "Omer Asik",
        company: "Nvidia",
        topic: "AI Integration",
    },
];

/// Numeric sort key for an `HH:MM` time: the integer `HHMM`.
fn time_key(time: &str) -> u32 {
    time.replace(':', "").parse().unwrap_or(u32::MAX)
}

/// The earliest-scheduled meeting, or `None` for an empty schedule.
pub fn next_meeting(meetings: &[Meeting]) -> Option<&Meeting> {
    meetings.iter().min_by_key(|m| time_key(m.time))
}

/// Fixed sentence template for a meeting lookup reply.
pub fn format_meeting_reply(meeting: &Meeting) -> String {
    format!(
        "You have a meeting at {} with {} from {}. The topic is: {}.",
        meeting.time, meeting.client, meeting.company, meeting.topic
    )
}
