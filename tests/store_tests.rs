use timetrack::db::log::load_log;
use timetrack::db::pool::DbPool;
use timetrack::db::queries::{
    earliest_or_latest, forced_time, insert_event, load_events_by_date, record_event,
};
use timetrack::models::event::Event;
use timetrack::models::event_kind::EventKind;

mod common;
use common::{at, day, setup_test_dir};

fn record(pool: &DbPool, kind: EventKind, ts: &str, forced: bool) {
    let (d, t) = ts.split_once(' ').expect("date and time");
    record_event(&pool.conn, &Event::new(kind, at(d, t), forced)).expect("record event");
}

#[test]
fn test_earliest_wakeup_ignores_insertion_order() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Wakeup, "2026-10-19 09:15:00", false);
    record(&pool, EventKind::Wakeup, "2026-10-19 07:45:30", false);
    record(&pool, EventKind::Wakeup, "2026-10-19 11:00:00", false);

    let earliest = earliest_or_latest(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap();
    assert_eq!(earliest, Some(at("2026-10-19", "07:45:30")));
}

#[test]
fn test_latest_sleep_is_maximum() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Sleep, "2026-10-19 18:00:00", false);
    record(&pool, EventKind::Sleep, "2026-10-19 23:10:00", false);
    record(&pool, EventKind::Sleep, "2026-10-19 12:30:00", false);

    let latest = earliest_or_latest(&pool.conn, EventKind::Sleep, &day("2026-10-19")).unwrap();
    assert_eq!(latest, Some(at("2026-10-19", "23:10:00")));
}

#[test]
fn test_day_range_is_half_open() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Wakeup, "2026-10-19 00:00:00", false);
    record(&pool, EventKind::Sleep, "2026-10-20 00:00:00", false);

    let monday = day("2026-10-19");
    assert_eq!(
        earliest_or_latest(&pool.conn, EventKind::Wakeup, &monday).unwrap(),
        Some(at("2026-10-19", "00:00:00"))
    );
    // midnight of the next day belongs to the next day
    assert_eq!(
        earliest_or_latest(&pool.conn, EventKind::Sleep, &monday).unwrap(),
        None
    );
    assert_eq!(
        earliest_or_latest(&pool.conn, EventKind::Sleep, &day("2026-10-20")).unwrap(),
        Some(at("2026-10-20", "00:00:00"))
    );
}

#[test]
fn test_no_events_yield_none() {
    let pool = DbPool::open_in_memory().expect("open store");
    let d = day("2026-10-19");

    assert_eq!(earliest_or_latest(&pool.conn, EventKind::Wakeup, &d).unwrap(), None);
    assert_eq!(forced_time(&pool.conn, EventKind::Sleep, &d).unwrap(), None);
}

#[test]
fn test_forced_insert_clears_previous_forced_flags() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Wakeup, "2026-10-19 08:00:00", true);
    record(&pool, EventKind::Wakeup, "2026-10-19 07:00:00", false);
    record(&pool, EventKind::Wakeup, "2026-10-19 09:30:00", true);

    let events = load_events_by_date(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap();
    assert_eq!(events.len(), 3);

    let forced: Vec<&Event> = events.iter().filter(|e| e.forced).collect();
    assert_eq!(forced.len(), 1, "exactly one forced event must remain");
    assert_eq!(forced[0].timestamp, at("2026-10-19", "09:30:00"));

    assert_eq!(
        forced_time(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap(),
        Some(at("2026-10-19", "09:30:00"))
    );
}

#[test]
fn test_forced_time_prefers_newest_row() {
    let pool = DbPool::open_in_memory().expect("open store");
    let d = day("2026-10-19");

    // bypasses record_event, which would clear the first flag
    let first = insert_event(
        &pool.conn,
        &Event::new(EventKind::Sleep, at("2026-10-19", "18:00:00"), true),
    )
    .unwrap();
    let second = insert_event(
        &pool.conn,
        &Event::new(EventKind::Sleep, at("2026-10-19", "16:00:00"), true),
    )
    .unwrap();
    assert!(second > first);

    assert_eq!(
        forced_time(&pool.conn, EventKind::Sleep, &d).unwrap(),
        Some(at("2026-10-19", "16:00:00"))
    );
}

#[test]
fn test_forced_insert_keeps_other_days_and_kinds() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Wakeup, "2026-10-19 08:00:00", true);
    record(&pool, EventKind::Sleep, "2026-10-20 17:00:00", true);
    record(&pool, EventKind::Wakeup, "2026-10-20 08:30:00", true);

    assert_eq!(
        forced_time(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap(),
        Some(at("2026-10-19", "08:00:00"))
    );
    assert_eq!(
        forced_time(&pool.conn, EventKind::Sleep, &day("2026-10-20")).unwrap(),
        Some(at("2026-10-20", "17:00:00"))
    );
    assert_eq!(
        forced_time(&pool.conn, EventKind::Wakeup, &day("2026-10-20")).unwrap(),
        Some(at("2026-10-20", "08:30:00"))
    );
}

#[test]
fn test_recorded_timestamp_round_trips_at_second_precision() {
    let pool = DbPool::open_in_memory().expect("open store");

    let precise = at("2026-10-19", "08:12:34") + chrono::Duration::milliseconds(789);
    let ev = Event::new(EventKind::Wakeup, precise, false);
    record_event(&pool.conn, &ev).unwrap();

    let stored = earliest_or_latest(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap();
    assert_eq!(stored, Some(at("2026-10-19", "08:12:34")));
}

#[test]
fn test_record_writes_audit_log() {
    let pool = DbPool::open_in_memory().expect("open store");

    record(&pool, EventKind::Sleep, "2026-10-19 17:00:00", true);
    record(&pool, EventKind::Sleep, "2026-10-19 18:00:00", true);

    let log = load_log(&pool.conn).unwrap();
    let ops: Vec<&str> = log.iter().map(|e| e.operation.as_str()).collect();

    assert_eq!(ops.first(), Some(&"migration_applied"));
    assert_eq!(ops.iter().filter(|o| **o == "record").count(), 2);
    assert_eq!(ops.iter().filter(|o| **o == "unforce").count(), 1);
}

#[test]
fn test_close_commits_and_drop_rolls_back() {
    let dir = setup_test_dir("store_commit");
    let file = dir.join("db").join("timetrack.sqlite");

    {
        let pool = DbPool::new(&file).expect("open store");
        record(&pool, EventKind::Wakeup, "2026-10-19 08:00:00", false);
        pool.close().expect("commit");
    }

    {
        let pool = DbPool::new(&file).expect("reopen store");
        record(&pool, EventKind::Wakeup, "2026-10-19 06:00:00", false);
        // dropped without close
    }

    let pool = DbPool::new(&file).expect("reopen store");
    let events = load_events_by_date(&pool.conn, EventKind::Wakeup, &day("2026-10-19")).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].timestamp, at("2026-10-19", "08:00:00"));
}
