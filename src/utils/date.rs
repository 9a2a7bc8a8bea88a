use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, Weekday};

/// Format accepted by `--datetime`, e.g. `31.12.2016 23:59`.
pub const ARGUMENT_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse the `--datetime` argument.
///
/// Accepts a full `dd.mm.yyyy HH:MM` datetime or a bare `HH:MM`, which is
/// placed on `today`.
pub fn parse_datetime_arg(arg: &str, today: NaiveDate) -> AppResult<NaiveDateTime> {
    let trimmed = arg.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, ARGUMENT_DATETIME_FORMAT) {
        return Ok(dt);
    }

    if let Some(t) = parse_time(trimmed) {
        return Ok(today.and_time(t));
    }

    Err(AppError::InvalidDateTime(arg.to_string()))
}

pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Days of the reporting window: Monday of the reference week through the
/// reference day, never past `last`.
pub fn reporting_window(reference: NaiveDate, last: Weekday) -> Vec<NaiveDate> {
    let monday = monday_of_week(reference);
    let max_weekday = reference
        .weekday()
        .number_from_monday()
        .min(last.number_from_monday());

    monday
        .iter_days()
        .take(max_weekday as usize)
        .collect()
}
