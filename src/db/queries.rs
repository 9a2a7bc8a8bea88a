use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::event::{DB_TIMESTAMP_FORMAT, Event, parse_db_timestamp};
use crate::models::event_kind::EventKind;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Half-open interval `[midnight(date), midnight(date + 1))` in storage format.
pub fn day_bounds(date: &NaiveDate) -> (String, String) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .checked_add_days(Days::new(1))
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);

    (
        start.format(DB_TIMESTAMP_FORMAT).to_string(),
        end.format(DB_TIMESTAMP_FORMAT).to_string(),
    )
}

fn to_timestamp(raw: &str) -> Result<NaiveDateTime> {
    parse_db_timestamp(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row, kind: EventKind) -> Result<Event> {
    let time_str: String = row.get("time")?;

    Ok(Event {
        id: row.get("id")?,
        timestamp: to_timestamp(&time_str)?,
        kind,
        forced: row.get::<_, i32>("forced")? == 1,
    })
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    let sql = format!("INSERT INTO {} (time, forced) VALUES (?1, ?2)", ev.kind.table());
    conn.execute(
        &sql,
        params![ev.db_timestamp(), if ev.forced { 1 } else { 0 }],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Drop the forced flag from every event of `kind` on `date`.
/// Returns the number of rows touched.
pub fn clear_forced(conn: &Connection, kind: EventKind, date: &NaiveDate) -> AppResult<usize> {
    let (from, to) = day_bounds(date);
    let sql = format!(
        "UPDATE {} SET forced = 0 WHERE forced = 1 AND time >= ?1 AND time < ?2",
        kind.table()
    );
    Ok(conn.execute(&sql, params![from, to])?)
}

/// Store an event. A forced event first takes the forced flag away from the
/// other events of the same kind and day, so at most one stays forced.
pub fn record_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    if ev.forced {
        let cleared = clear_forced(conn, ev.kind, &ev.date())?;
        if cleared > 0 {
            ttlog(
                conn,
                "unforce",
                ev.kind.ek_as_str(),
                &format!("Cleared {} forced event(s) on {}", cleared, ev.date()),
            )?;
        }
    }

    let id = insert_event(conn, ev)?;

    ttlog(
        conn,
        "record",
        ev.kind.ek_as_str(),
        &format!(
            "{}{} at {}",
            if ev.forced { "forced " } else { "" },
            ev.kind.label(),
            ev.db_timestamp()
        ),
    )?;

    Ok(id)
}

/// Earliest wake up or latest sleep of the day, over all events of the kind.
pub fn earliest_or_latest(
    conn: &Connection,
    kind: EventKind,
    date: &NaiveDate,
) -> AppResult<Option<NaiveDateTime>> {
    let (from, to) = day_bounds(date);
    let sql = format!(
        "SELECT {}(time) FROM {} WHERE time >= ?1 AND time < ?2",
        kind.aggregate(),
        kind.table()
    );

    let raw: Option<String> = conn.query_row(&sql, params![from, to], |row| row.get(0))?;
    match raw {
        Some(s) => Ok(Some(to_timestamp(&s)?)),
        None => Ok(None),
    }
}

/// Timestamp of the forced event of the kind on that day, if any.
pub fn forced_time(
    conn: &Connection,
    kind: EventKind,
    date: &NaiveDate,
) -> AppResult<Option<NaiveDateTime>> {
    let (from, to) = day_bounds(date);
    let sql = format!(
        "SELECT time FROM {} WHERE forced = 1 AND time >= ?1 AND time < ?2
         ORDER BY id DESC LIMIT 1",
        kind.table()
    );

    let raw: Option<String> = conn
        .query_row(&sql, params![from, to], |row| row.get(0))
        .optional()?;
    match raw {
        Some(s) => Ok(Some(to_timestamp(&s)?)),
        None => Ok(None),
    }
}

pub fn load_events_by_date(
    conn: &Connection,
    kind: EventKind,
    date: &NaiveDate,
) -> AppResult<Vec<Event>> {
    let (from, to) = day_bounds(date);
    let sql = format!(
        "SELECT id, time, forced FROM {}
         WHERE time >= ?1 AND time < ?2
         ORDER BY time ASC, id ASC",
        kind.table()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![from, to], |row| map_row(row, kind))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
