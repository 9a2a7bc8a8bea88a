//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! The connection is opened with manual commit: a transaction starts as soon
//! as the schema is in place and is committed once by [`DbPool::close`].
//! Dropping the pool without closing it rolls every change back.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, make sure the schema exists and
    /// begin the run's transaction.
    pub fn new(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::prepare(conn)
    }

    /// Same as [`DbPool::new`] but backed by memory; used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        conn.execute_batch("BEGIN DEFERRED;")?;
        Ok(Self { conn })
    }

    /// Commit the run's transaction and close the connection.
    pub fn close(self) -> AppResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT;")?;
        }
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
