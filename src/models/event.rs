use super::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Storage format of `wakeups.time` / `sleeps.time`.
/// Lexicographic order of the text equals chronological order.
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub timestamp: NaiveDateTime, // ⇔ <table>.time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub kind: EventKind,          // ⇔ wakeups | sleeps
    pub forced: bool,             // ⇔ <table>.forced (INT 0/1)
}

impl Event {
    /// Build an event not yet stored (`id = 0`).
    /// Sub-second precision is dropped: the store keeps seconds only.
    pub fn new(kind: EventKind, timestamp: NaiveDateTime, forced: bool) -> Self {
        Self {
            id: 0,
            timestamp: truncate_to_seconds(timestamp),
            kind,
            forced,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn db_timestamp(&self) -> String {
        self.timestamp.format(DB_TIMESTAMP_FORMAT).to_string()
    }
}

pub fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

pub fn parse_db_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_TIMESTAMP_FORMAT).ok()
}
