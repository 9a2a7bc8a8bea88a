use chrono::Duration;

/// Difference between the day's work and the ideal day.
pub fn day_delta(worked: Duration, ideal: Duration) -> Duration {
    worked - ideal
}

/// Difference between the work done so far this week and the ideal work up
/// to `day_index` (Monday = 1).
pub fn week_delta(total_so_far: Duration, ideal: Duration, day_index: u32) -> Duration {
    total_so_far - ideal * day_index as i32
}
