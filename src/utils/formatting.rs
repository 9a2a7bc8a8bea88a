//! Formatting utilities used for CLI output.

use chrono::{Duration, NaiveDateTime};

/// Placeholder rendered for a missing wake up or sleep time.
pub const UNDEFINED_TIME: &str = "-";

/// `8h 40m`; negative durations get a leading minus.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.abs();
    format!("{}{}h {:02}m", sign, abs / 3600, (abs % 3600) / 60)
}

/// Like [`format_duration`] but always signed: `+0h 00m`, `-1h 05m`.
pub fn format_delta(d: Duration) -> String {
    let secs = d.num_seconds();
    let abs = secs.abs();
    let sign = if secs < 0 { "-" } else { "+" };
    format!("{}{}h {:02}m", sign, abs / 3600, (abs % 3600) / 60)
}

pub fn format_optional_time(ts: Option<NaiveDateTime>, pattern: &str) -> String {
    match ts {
        Some(t) => t.format(pattern).to_string(),
        None => UNDEFINED_TIME.to_string(),
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
