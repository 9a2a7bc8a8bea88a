use chrono::{Duration, NaiveDateTime};

/// Work interval of a day once both ends are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub end: Option<NaiveDateTime>,
    pub provisional: bool,
    pub duration: Option<Duration>,
}

/// Build the interval from the effective wake up and sleep times.
///
/// On the reference day a missing sleep is replaced by the reference moment
/// when `open_until_reference` is set, as long as that moment is not before
/// the wake up.
pub fn build_interval(
    wakeup: Option<NaiveDateTime>,
    sleep: Option<NaiveDateTime>,
    reference: NaiveDateTime,
    open_until_reference: bool,
) -> Interval {
    match (wakeup, sleep) {
        (Some(start), Some(end)) => Interval {
            end: Some(end),
            provisional: false,
            duration: Some(end - start),
        },
        (Some(start), None)
            if open_until_reference
                && start.date() == reference.date()
                && reference >= start =>
        {
            Interval {
                end: Some(reference),
                provisional: true,
                duration: Some(reference - start),
            }
        }
        _ => Interval {
            end: sleep,
            provisional: false,
            duration: None,
        },
    }
}
