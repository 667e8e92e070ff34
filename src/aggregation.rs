use crate::utils::{clamp_month, quarter_month_indices, quarter_of_month};

/// Folds twelve months into calendar quarters (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
pub fn monthly_to_quarterly(monthly: &[f64; 12]) -> [f64; 4] {
    let mut quarterly = [0.0; 4];
    for (idx, value) in monthly.iter().enumerate() {
        quarterly[idx / 3] += value;
    }
    quarterly
}

/// Cumulative total from January through `month` (clamped to 1..=12).
pub fn monthly_to_ytd(monthly: &[f64; 12], month: i32) -> f64 {
    monthly[..clamp_month(month)].iter().sum()
}

/// Total of the month's quarter up to and including the month.
pub fn quarter_to_date(monthly: &[f64; 12], month: i32) -> f64 {
    let range = quarter_month_indices(quarter_of_month(month));
    monthly[range.start..clamp_month(month)].iter().sum()
}

/// Treats months that have not been observed yet as zero.
pub fn fill_missing(monthly: &[Option<f64>; 12]) -> [f64; 12] {
    monthly.map(|value| value.unwrap_or(0.0))
}
