//! Time progress under three conventions.
//!
//! - **Linear**: every month is worth the same.
//! - **Weighted**: months are worth their configured weight.
//! - **Actual**: months are worth their share of a realized prior-year series.
//!
//! All functions take a 1-indexed month and clamp it to `1..=12`. Degenerate
//! inputs resolve to `0.0`, never to an error or `NaN`.

use crate::utils::{clamp_month, position_in_quarter, quarter_month_indices, quarter_of_month};
use crate::validator::WeightVector;
use serde::{Deserialize, Serialize};

pub fn linear_progress_year(month: i32) -> f64 {
    clamp_month(month) as f64 / 12.0
}

pub fn linear_progress_quarter(month: i32) -> f64 {
    position_in_quarter(month) as f64 / 3.0
}

/// Cumulative share of the annual weight elapsed through `month`.
pub fn weighted_progress_year(weights: &WeightVector, month: i32) -> f64 {
    weights.as_array()[..clamp_month(month)].iter().sum()
}

/// Share of the quarter's weight elapsed through `month`.
///
/// Returns 0 when the quarter carries no weight at all.
pub fn weighted_progress_quarter(weights: &WeightVector, month: i32) -> f64 {
    let month = clamp_month(month);
    let range = quarter_month_indices(quarter_of_month(month as i32));
    let slice = &weights.as_array()[range.clone()];

    let quarter_total: f64 = slice.iter().sum();
    if quarter_total == 0.0 {
        return 0.0;
    }

    let elapsed: f64 = slice[..month - range.start].iter().sum();
    elapsed / quarter_total
}

/// This month's share of the full-year realized total.
///
/// Yields 0 when the series is not exactly twelve months long, when the
/// current month is unobserved, or when the observed year sums to zero.
pub fn actual_progress_year(actuals: &[Option<f64>], month: i32) -> f64 {
    if actuals.len() != 12 {
        return 0.0;
    }

    let Some(current) = actuals[clamp_month(month) - 1] else {
        return 0.0;
    };

    let year_total: f64 = actuals.iter().flatten().sum();
    if year_total == 0.0 {
        return 0.0;
    }

    current / year_total
}

/// This month's share of its quarter's realized total.
///
/// Unobserved months elsewhere in the quarter count as zero; an unobserved
/// current month short-circuits to 0.
pub fn actual_progress_quarter(actuals: &[Option<f64>], month: i32) -> f64 {
    if actuals.len() != 12 {
        return 0.0;
    }

    let month = clamp_month(month);
    let Some(current) = actuals[month - 1] else {
        return 0.0;
    };

    let range = quarter_month_indices(quarter_of_month(month as i32));
    let quarter_total: f64 = actuals[range].iter().map(|v| v.unwrap_or(0.0)).sum();
    if quarter_total == 0.0 {
        return 0.0;
    }

    current / quarter_total
}

/// All six progress figures for one month, side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub month: u32,
    pub linear_year: f64,
    pub linear_quarter: f64,
    pub weighted_year: f64,
    pub weighted_quarter: f64,
    pub actual_year: f64,
    pub actual_quarter: f64,
}

impl ProgressReport {
    pub fn compute(weights: &WeightVector, prior_actuals: &[Option<f64>], month: i32) -> Self {
        Self {
            month: clamp_month(month) as u32,
            linear_year: linear_progress_year(month),
            linear_quarter: linear_progress_quarter(month),
            weighted_year: weighted_progress_year(weights, month),
            weighted_quarter: weighted_progress_quarter(weights, month),
            actual_year: actual_progress_year(prior_actuals, month),
            actual_quarter: actual_progress_quarter(prior_actuals, month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::WeightProfile;
    use crate::seasonality::get_profile_weights;

    fn front_loaded_year_q1_empty() -> WeightVector {
        let mut weights = [1.0 / 9.0; 12];
        weights[0] = 0.0;
        weights[1] = 0.0;
        weights[2] = 0.0;
        WeightVector::new(&weights).unwrap()
    }

    fn observed(values: [f64; 12]) -> Vec<Option<f64>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    #[test]
    fn test_linear_progress_year() {
        assert_eq!(linear_progress_year(6), 0.5);
        assert_eq!(linear_progress_year(12), 1.0);
        assert_eq!(linear_progress_year(0), 1.0 / 12.0);
        assert_eq!(linear_progress_year(40), 1.0);
    }

    #[test]
    fn test_linear_progress_quarter() {
        assert!((linear_progress_quarter(2) - 0.6667).abs() < 1e-4);
        assert!((linear_progress_quarter(4) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(linear_progress_quarter(9), 1.0);
    }

    #[test]
    fn test_weighted_progress_flat_matches_linear() {
        let weights = WeightVector::uniform();
        for month in 1..=12 {
            assert!((weighted_progress_year(&weights, month) - linear_progress_year(month)).abs() < 1e-12);
            assert!(
                (weighted_progress_quarter(&weights, month) - linear_progress_quarter(month)).abs()
                    < 1e-12
            );
        }
    }

    #[test]
    fn test_weighted_progress_follows_profile() {
        let weights = get_profile_weights(&WeightProfile::RetailPeak).unwrap();
        assert!((weighted_progress_year(&weights, 11) - 0.7).abs() < 1e-9);
        // Q4 = 0.080 + 0.105 + 0.300
        assert!((weighted_progress_quarter(&weights, 10) - 0.080 / 0.485).abs() < 1e-9);
        assert!((weighted_progress_quarter(&weights, 12) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_progress_quarter_zero_weight() {
        let weights = front_loaded_year_q1_empty();
        for month in 1..=3 {
            let progress = weighted_progress_quarter(&weights, month);
            assert_eq!(progress, 0.0);
            assert!(!progress.is_nan());
        }
        assert!((weighted_progress_quarter(&weights, 5) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_actual_progress_year() {
        let actuals = observed([
            10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 90.0,
        ]);
        assert!((actual_progress_year(&actuals, 1) - 0.05).abs() < 1e-12);
        assert!((actual_progress_year(&actuals, 12) - 0.45).abs() < 1e-12);
        assert_eq!(actual_progress_year(&actuals, 15), actual_progress_year(&actuals, 12));
    }

    #[test]
    fn test_actual_progress_year_wrong_length() {
        let short = vec![Some(10.0); 11];
        assert_eq!(actual_progress_year(&short, 3), 0.0);
        assert_eq!(actual_progress_quarter(&short, 3), 0.0);
    }

    #[test]
    fn test_actual_progress_year_current_month_missing() {
        let mut actuals = vec![Some(10.0); 12];
        actuals[4] = None;
        assert_eq!(actual_progress_year(&actuals, 5), 0.0);
        assert!((actual_progress_year(&actuals, 4) - 10.0 / 110.0).abs() < 1e-12);
    }

    #[test]
    fn test_actual_progress_zero_total() {
        let zeros = vec![Some(0.0); 12];
        assert_eq!(actual_progress_year(&zeros, 6), 0.0);
        assert_eq!(actual_progress_quarter(&zeros, 6), 0.0);

        let empty = vec![None; 12];
        assert_eq!(actual_progress_year(&empty, 6), 0.0);
    }

    #[test]
    fn test_actual_progress_quarter() {
        let mut actuals = observed([
            10.0, 20.0, 30.0, 40.0, 40.0, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
        assert!((actual_progress_quarter(&actuals, 2) - 20.0 / 60.0).abs() < 1e-12);
        assert!((actual_progress_quarter(&actuals, 4) - 0.4).abs() < 1e-12);

        // Other missing months in the quarter count as zero.
        actuals[5] = None;
        assert!((actual_progress_quarter(&actuals, 4) - 0.5).abs() < 1e-12);

        // A missing current month wins regardless of the rest.
        assert_eq!(actual_progress_quarter(&actuals, 6), 0.0);
    }

    #[test]
    fn test_progress_report() {
        let prior = observed([100.0; 12]);
        let report = ProgressReport::compute(&WeightVector::uniform(), &prior, 6);

        assert_eq!(report.month, 6);
        assert_eq!(report.linear_year, 0.5);
        assert_eq!(report.linear_quarter, 1.0);
        assert!((report.weighted_year - 0.5).abs() < 1e-12);
        assert!((report.actual_year - 1.0 / 12.0).abs() < 1e-12);
        assert!((report.actual_quarter - 1.0 / 3.0).abs() < 1e-12);
    }
}
