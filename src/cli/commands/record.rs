use crate::config::Config;
use crate::core::logic::ReportOptions;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Record a wake up or sleep event at `when`.
pub fn handle(
    conn: &Connection,
    kind: EventKind,
    when: NaiveDateTime,
    forced: bool,
    opts: &ReportOptions,
    cfg: &Config,
) -> AppResult<()> {
    let ev = RecordLogic::apply(conn, kind, when, forced, opts.forced_events)?;

    success(format!(
        "Recorded {} {} on {} {}",
        kind.label(),
        if ev.forced { "forced event" } else { "event" },
        ev.timestamp.format(&cfg.date_format),
        ev.timestamp.format(&cfg.time_format),
    ));

    Ok(())
}
