use crate::core::log::LogLogic;
use crate::errors::AppResult;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> AppResult<()> {
    LogLogic::print_log(conn)
}
