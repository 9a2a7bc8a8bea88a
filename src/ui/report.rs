//! Rendering of the weekly report.

use crate::config::Config;
use crate::models::day_record::DayRecord;
use crate::models::week_report::WeekReport;
use crate::utils::colors::{DAY, DURATION, RUNNING, TIME, UNDEFINED, paint, paint_delta};
use crate::utils::formatting::{UNDEFINED_TIME, format_optional_time, pad_left};
use crate::utils::{format_delta, format_duration};
use ansi_term::Colour;

const DOUBLE_RULE: &str = "====================================================";
const SINGLE_RULE: &str = "----------------------------------------------------";

pub fn render_header(report: &WeekReport, cfg: &Config) -> String {
    let today = report.reference.date().format(&cfg.date_format).to_string();
    format!("Today is {}", paint(DAY, &today))
}

fn render_slot(value: String, colour: Colour) -> String {
    let padded = pad_left(&value, 5);
    if value == UNDEFINED_TIME {
        paint(UNDEFINED, &padded)
    } else {
        paint(colour, &padded)
    }
}

pub fn render_day(day: &DayRecord, cfg: &Config) -> String {
    let formatted_day = pad_left(&day.date.format(&cfg.date_format).to_string(), 20);
    let start = render_slot(format_optional_time(day.wakeup, &cfg.time_format), TIME);
    let end = render_slot(
        format_optional_time(day.sleep, &cfg.time_format),
        if day.provisional { RUNNING } else { TIME },
    );

    let mut line = format!("{} from {} to {}", paint(DAY, &formatted_day), start, end);

    if let Some(worked) = day.work_duration {
        line.push(' ');
        line.push_str(&paint(DURATION, &format_duration(worked)));
    }

    if let Some(d) = day.day_delta {
        line.push_str("  day ");
        line.push_str(&paint_delta(d, &format_delta(d)));
    }

    if let Some(w) = day.week_delta {
        line.push_str("  week ");
        line.push_str(&paint_delta(w, &format_delta(w)));
    }

    if day.provisional {
        line.push(' ');
        line.push_str(&paint(RUNNING, "(running)"));
    }

    line
}

pub fn render_summary(report: &WeekReport) -> String {
    let mut out = format!(
        "Total worktime: {}",
        paint(DURATION, &format_duration(report.total_work_duration))
    );

    if let Some(w) = report.last_week_delta() {
        out.push_str(&format!("\nWeek balance: {}", paint_delta(w, &format_delta(w))));
    }

    out
}

pub fn render_report(report: &WeekReport, cfg: &Config) -> String {
    let mut lines = vec![render_header(report, cfg), DOUBLE_RULE.to_string()];
    lines.extend(report.days.iter().map(|d| render_day(d, cfg)));
    lines.push(SINGLE_RULE.to_string());
    lines.push(render_summary(report));
    lines.join("\n")
}
