//! # Target Tracker
//!
//! A library for spreading annual targets into monthly plans and judging
//! actual performance against them.
//!
//! ## Core Concepts
//!
//! - **Weight Vector**: Twelve monthly shares (January first) that sum to 1.0 within 1e-6
//! - **Allocation**: Annual target × weights, optionally rounded with the residual booked to December
//! - **Rollups**: Quarterly and year-to-date totals of a monthly series
//! - **Cross-tabulation**: Fact rows summed by group and product with `all` / `total` marginals
//! - **Progress**: Fraction of the period elapsed under linear, weighted and prior-year-actual conventions
//! - **Status**: Achievement and growth ratios classified as good / normal / warning / danger
//!
//! Configuration errors (bad weights, bad thresholds) fail loudly. Data gaps
//! (unreported months, zero totals, out-of-range months) resolve to neutral values.
//!
//! ## Example
//!
//! ```rust,ignore
//! use target_tracker::*;
//!
//! let config = TrackerConfig {
//!     weights: WeightProfile::RetailPeak,
//!     thresholds: ThresholdRule::default(),
//!     rounding: RoundingMode::Integer,
//! };
//!
//! let mut actuals = [None; 12];
//! actuals[0] = Some(48_000.0);
//! actuals[1] = Some(41_500.0);
//!
//! let input = PerformanceInput {
//!     annual_target: 1_000_000.0,
//!     actuals,
//!     prior_actuals: [Some(80_000.0); 12],
//! };
//!
//! let report = build_report(&config, &input, 2).unwrap();
//! println!("{:?} / {:?}", report.achievement_status, report.growth_status);
//! ```

pub mod aggregation;
pub mod allocator;
pub mod crosstab;
pub mod directory;
pub mod engine;
pub mod error;
pub mod overrides;
pub mod progress;
pub mod schema;
pub mod seasonality;
pub mod status;
pub mod utils;
pub mod validator;

pub use aggregation::{fill_missing, monthly_to_quarterly, monthly_to_ytd, quarter_to_date};
pub use allocator::{allocate, round_to};
pub use crosstab::{aggregate_to_group_and_all, BucketKey, FactRow, GroupKey, ProductKey};
pub use directory::{Organization, OrganizationDirectory};
pub use engine::{BucketSummary, PerformanceInput, PerformanceReport, PlanEngine, PortfolioEntry};
pub use error::{Result, ThresholdViolation, TrackerError};
pub use overrides::ConfigOverrides;
pub use progress::*;
pub use schema::*;
pub use seasonality::get_profile_weights;
pub use status::{achievement_rate, achievement_status, growth_rate, growth_status};
pub use validator::{
    validate_config, validate_thresholds, validate_weights, WeightVector, WEIGHT_SUM_TOLERANCE,
};

use log::info;

/// Validates `config` and produces a single report for `month`.
pub fn build_report(
    config: &TrackerConfig,
    input: &PerformanceInput,
    month: i32,
) -> Result<PerformanceReport> {
    let engine = PlanEngine::new(config)?;
    info!(
        "Building report for month {} with {:?} weights and {:?} rounding",
        month, config.weights, config.rounding
    );
    Ok(engine.report(input, month))
}

/// Validates `config` and rolls a portfolio up by group and product.
pub fn build_summary(
    config: &TrackerConfig,
    directory: &OrganizationDirectory,
    entries: &[PortfolioEntry],
    month: i32,
) -> Result<std::collections::BTreeMap<BucketKey, BucketSummary>> {
    let engine = PlanEngine::new(config)?;
    Ok(engine.summarize(directory, entries, month))
}
