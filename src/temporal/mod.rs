//! Calendar and clock helpers used to derive grouping keys
//!
//! Months are split into four equal-sized buckets rather than calendar weeks,
//! so every month has exactly `Week 1` through `Week 4`.

use chrono::{Datelike, NaiveTime, TimeDelta, Timelike};

/// Number of week buckets per month
pub const WEEKS_PER_MONTH: u32 = 4;

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month of `date`
pub fn days_in_month<D: Datelike>(date: &D) -> u32 {
    match date.month() {
        2 if is_leap_year(date.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Week bucket (1..=4) of `date` within its month
///
/// The month is cut into chunks of `ceil(days_in_month / 4)` days and the
/// result is clamped to 4.
pub fn week_of_month<D: Datelike>(date: &D) -> u32 {
    let week_size = days_in_month(date).div_ceil(WEEKS_PER_MONTH);
    let week = (date.day() - 1) / week_size + 1;
    week.min(WEEKS_PER_MONTH)
}

/// `"Week N"` label for the bucket `date` falls into
pub fn week_of_month_label<D: Datelike>(date: &D) -> String {
    format!("Week {}", week_of_month(date))
}

/// `"HH:00–HH:00"` label for the hour starting at `hour`
///
/// The end hour wraps, so 23 renders as `23:00–00:00`.
pub fn hour_interval_label(hour: u32) -> String {
    format!("{:02}:00–{:02}:00", hour, (hour + 1) % 24)
}

/// `"HH:mm - HH:mm"` label for the clock hour containing `time`
pub fn hourly_interval_label(time: NaiveTime) -> String {
    let start = NaiveTime::from_hms_opt(time.hour(), 0, 0).unwrap_or(time);
    let end = start + TimeDelta::hours(1);
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}
