use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Effective work interval of one day of the reporting window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub wakeup: Option<NaiveDateTime>,
    pub sleep: Option<NaiveDateTime>,
    /// `sleep` is the reference moment, not a recorded event.
    pub provisional: bool,
    pub work_duration: Option<Duration>,
    pub day_delta: Option<Duration>,
    pub week_delta: Option<Duration>,
}

impl DayRecord {
    pub fn undefined(date: NaiveDate) -> Self {
        Self {
            date,
            wakeup: None,
            sleep: None,
            provisional: false,
            work_duration: None,
            day_delta: None,
            week_delta: None,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.work_duration.is_some()
    }
}
