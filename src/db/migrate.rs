use crate::models::event_kind::EventKind;
use rusqlite::{Connection, OptionalExtension, Result};

const SCHEMA_VERSION: &str = "20161231_0001_events_schema";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the table holding the events of one kind.
fn create_event_table(conn: &Connection, kind: EventKind) -> Result<()> {
    let table = kind.table();
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            time    TEXT NOT NULL,
            forced  INTEGER NOT NULL DEFAULT 0 CHECK(forced IN (0, 1))
        );

        CREATE INDEX IF NOT EXISTS idx_{table}_time ON {table}(time);
        "#
    ))?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if is_applied(conn, SCHEMA_VERSION)? {
        return Ok(());
    }

    for kind in [EventKind::Wakeup, EventKind::Sleep] {
        if !table_exists(conn, kind.table())? {
            create_event_table(conn, kind)?;
        }
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now', 'localtime'), 'migration_applied', ?1, 'Created wakeups and sleeps tables')",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
