use crate::config::Config;
use crate::core::logic::{Core, ReportOptions};
use crate::errors::AppResult;
use crate::ui::report::render_report;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Print the stats of the week containing `reference`.
pub fn handle(
    conn: &Connection,
    reference: NaiveDateTime,
    opts: &ReportOptions,
    cfg: &Config,
) -> AppResult<()> {
    let report = Core::build_week_report(conn, reference, opts)?;
    println!("{}", render_report(&report, cfg));
    Ok(())
}
