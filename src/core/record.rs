use crate::db::queries::record_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// High-level business logic for recording a wake up or sleep event.
pub struct RecordLogic;

impl RecordLogic {
    pub fn apply(
        conn: &Connection,
        kind: EventKind,
        timestamp: NaiveDateTime,
        forced: bool,
        forced_events_enabled: bool,
    ) -> AppResult<Event> {
        if forced && !forced_events_enabled {
            return Err(AppError::ForcedEventsDisabled);
        }

        let mut ev = Event::new(kind, timestamp, forced);
        ev.id = record_event(conn, &ev)?;
        Ok(ev)
    }
}
