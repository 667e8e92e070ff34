use chrono::{Datelike, NaiveDate};
use std::ops::Range;

/// Clamps a 1-indexed month into `1..=12`. Out-of-range values never fail.
pub fn clamp_month(month: i32) -> usize {
    month.clamp(1, 12) as usize
}

/// Returns the 1-indexed quarter (1..=4) of a clamped month.
pub fn quarter_of_month(month: i32) -> usize {
    (clamp_month(month) - 1) / 3 + 1
}

/// Returns the 0-based month indices belonging to a 1-indexed quarter.
///
/// # Examples
/// - Q1 = 0..3 (Jan, Feb, Mar)
/// - Q4 = 9..12 (Oct, Nov, Dec)
pub fn quarter_month_indices(quarter: usize) -> Range<usize> {
    let start = (quarter.clamp(1, 4) - 1) * 3;
    start..start + 3
}

/// Position (1..=3) of a month within its quarter.
pub fn position_in_quarter(month: i32) -> usize {
    let month = clamp_month(month);
    month - (quarter_of_month(month as i32) - 1) * 3
}

/// Calendar month of a reporting date, suitable for every month-taking function.
pub fn reporting_month(date: NaiveDate) -> i32 {
    date.month() as i32
}

/// Rounds to two decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
