use crate::config::Config;
use crate::core::calculator::{delta, interval, resolve};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::event_kind::EventKind;
use crate::models::week_report::WeekReport;
use crate::utils::date::{parse_weekday, reporting_window};
use crate::utils::time::require_work_duration;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use rusqlite::Connection;
use std::fmt::Write;

/// Knobs of the weekly report, validated once from the configuration.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub ideal_work_duration: Duration,
    pub last_weekday: Weekday,
    pub forced_events: bool,
    pub show_deltas: bool,
    pub open_day_until_now: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            ideal_work_duration: Duration::hours(8) + Duration::minutes(40),
            last_weekday: Weekday::Fri,
            forced_events: true,
            show_deltas: true,
            open_day_until_now: true,
        }
    }
}

fn invalid_pattern(name: &str, pattern: &str) -> AppError {
    AppError::Config(format!("{} is not a usable chrono pattern: '{}'", name, pattern))
}

/// `date_format` renders plain dates, so it may not ask for time fields.
fn validate_date_pattern(pattern: &str) -> AppResult<()> {
    let mut out = String::new();
    write!(out, "{}", NaiveDate::default().format(pattern))
        .map_err(|_| invalid_pattern("date_format", pattern))
}

/// `time_format` renders naive datetimes, so it may not ask for an offset.
fn validate_time_pattern(pattern: &str) -> AppResult<()> {
    let mut out = String::new();
    write!(out, "{}", NaiveDateTime::default().format(pattern))
        .map_err(|_| invalid_pattern("time_format", pattern))
}

impl ReportOptions {
    /// Validate the configuration and extract the report knobs.
    /// Formatting patterns are test-rendered here so rendering cannot fail later.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        validate_date_pattern(&cfg.date_format)?;
        validate_time_pattern(&cfg.time_format)?;

        let last_weekday = parse_weekday(&cfg.last_weekday).ok_or_else(|| {
            AppError::Config(format!(
                "last_weekday must be 'friday' or 'saturday', got '{}'",
                cfg.last_weekday
            ))
        })?;

        Ok(Self {
            ideal_work_duration: require_work_duration(&cfg.ideal_work_duration)?,
            last_weekday,
            forced_events: cfg.forced_events,
            show_deltas: cfg.show_deltas,
            open_day_until_now: cfg.open_day_until_now,
        })
    }
}

pub struct Core;

impl Core {
    /// Build the report of the week containing `reference`, as seen at that
    /// moment.
    pub fn build_week_report(
        conn: &Connection,
        reference: NaiveDateTime,
        opts: &ReportOptions,
    ) -> AppResult<WeekReport> {
        let mut days = Vec::new();
        let mut total = Duration::zero();

        for day in reporting_window(reference.date(), opts.last_weekday) {
            let wakeup =
                resolve::effective_time(conn, EventKind::Wakeup, &day, opts.forced_events)?;
            let sleep = resolve::effective_time(conn, EventKind::Sleep, &day, opts.forced_events)?;

            let iv = interval::build_interval(wakeup, sleep, reference, opts.open_day_until_now);

            let mut record = DayRecord::undefined(day);
            record.wakeup = wakeup;
            record.sleep = iv.end;
            record.provisional = iv.provisional;

            if let Some(worked) = iv.duration {
                total += worked;
                record.work_duration = Some(worked);

                if opts.show_deltas {
                    record.day_delta = Some(delta::day_delta(worked, opts.ideal_work_duration));
                    record.week_delta = Some(delta::week_delta(
                        total,
                        opts.ideal_work_duration,
                        day.weekday().number_from_monday(),
                    ));
                }
            }

            days.push(record);
        }

        Ok(WeekReport {
            reference,
            days,
            total_work_duration: total,
        })
    }
}
