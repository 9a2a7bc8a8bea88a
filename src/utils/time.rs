//! Time utilities: parsing HH:MM and work durations like "8h40m".

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a work duration: `8h40m`, `8h 40m`, `8h`, `40m` or `08:40`.
pub fn parse_work_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Some((h, m)) = s.split_once(':') {
        let h: i64 = h.trim().parse().ok()?;
        let m: i64 = m.trim().parse().ok()?;
        if h < 0 || !(0..60).contains(&m) {
            return None;
        }
        return Duration::try_hours(h)?.checked_add(&Duration::try_minutes(m)?);
    }

    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let (hours, rest) = match compact.split_once('h') {
        Some((h, rest)) => (h.parse::<i64>().ok()?, rest),
        None => (0, compact.as_str()),
    };

    let minutes = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')?.parse::<i64>().ok()?
    };

    if hours < 0 || minutes < 0 || (compact.contains('h') && minutes >= 60) {
        return None;
    }

    Duration::try_hours(hours)?.checked_add(&Duration::try_minutes(minutes)?)
}

/// Parse the ideal daily work duration; it must fit in one day.
pub fn require_work_duration(s: &str) -> AppResult<Duration> {
    match parse_work_duration(s) {
        Some(d) if d <= Duration::days(1) => Ok(d),
        _ => Err(AppError::InvalidDuration(s.to_string())),
    }
}
