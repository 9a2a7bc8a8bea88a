//! Effective wake up / sleep time of a single day.

use crate::db::queries::{earliest_or_latest, forced_time};
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// The forced event of the day wins; otherwise the earliest wake up or the
/// latest sleep. `with_forced = false` ignores forced flags entirely.
pub fn effective_time(
    conn: &Connection,
    kind: EventKind,
    date: &NaiveDate,
    with_forced: bool,
) -> AppResult<Option<NaiveDateTime>> {
    if with_forced && let Some(ts) = forced_time(conn, kind, date)? {
        return Ok(Some(ts));
    }
    earliest_or_latest(conn, kind, date)
}
