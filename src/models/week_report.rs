use super::day_record::DayRecord;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct WeekReport {
    pub reference: NaiveDateTime,
    pub days: Vec<DayRecord>,
    pub total_work_duration: Duration,
}

impl WeekReport {
    /// Weekly delta of the last defined day, i.e. where the week stands now.
    pub fn last_week_delta(&self) -> Option<Duration> {
        self.days.iter().rev().find_map(|d| d.week_delta)
    }
}
