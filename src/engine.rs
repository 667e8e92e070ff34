use crate::aggregation::{fill_missing, monthly_to_quarterly, monthly_to_ytd};
use crate::allocator::allocate;
use crate::crosstab::{aggregate_to_group_and_all, BucketKey, FactRow};
use crate::directory::OrganizationDirectory;
use crate::error::Result;
use crate::progress::ProgressReport;
use crate::schema::{RoundingMode, StatusTier, ThresholdRule, TrackerConfig};
use crate::status::{achievement_rate, achievement_status, growth_rate, growth_status};
use crate::utils::{clamp_month, reporting_month};
use crate::validator::{validate_config, WeightVector};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One organization/product's plan and observations for a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInput {
    pub annual_target: f64,
    /// Current-year actuals; `None` until a month has been reported.
    pub actuals: [Option<f64>; 12],
    /// Prior-year actuals, used for growth and for the empirical progress shape.
    pub prior_actuals: [Option<f64>; 12],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub month: u32,
    pub monthly_targets: [f64; 12],
    pub quarterly_targets: [f64; 4],
    pub ytd_target: f64,
    pub ytd_actual: f64,
    pub prior_ytd_actual: f64,
    pub achievement_rate: Option<f64>,
    pub achievement_status: Option<StatusTier>,
    pub growth_rate: Option<f64>,
    pub growth_status: Option<StatusTier>,
    pub progress: ProgressReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub org: String,
    pub product: String,
    pub input: PerformanceInput,
}

/// YTD rollup of one `(group, product)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub annual_target: f64,
    pub ytd_target: f64,
    pub ytd_actual: f64,
    pub prior_ytd_actual: f64,
    pub achievement_rate: Option<f64>,
    pub achievement_status: Option<StatusTier>,
    pub growth_rate: Option<f64>,
    pub growth_status: Option<StatusTier>,
}

struct Ratios {
    achievement_rate: Option<f64>,
    achievement_status: Option<StatusTier>,
    growth_rate: Option<f64>,
    growth_status: Option<StatusTier>,
}

/// Computes reports against a configuration validated once at construction.
pub struct PlanEngine {
    weights: WeightVector,
    thresholds: ThresholdRule,
    rounding: RoundingMode,
}

impl PlanEngine {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let weights = validate_config(config)?;
        Ok(Self {
            weights,
            thresholds: config.thresholds,
            rounding: config.rounding,
        })
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn thresholds(&self) -> &ThresholdRule {
        &self.thresholds
    }

    pub fn monthly_targets(&self, annual_target: f64) -> [f64; 12] {
        allocate(annual_target, &self.weights, self.rounding)
    }

    pub fn report(&self, input: &PerformanceInput, month: i32) -> PerformanceReport {
        let month_num = clamp_month(month) as i32;

        let monthly_targets = self.monthly_targets(input.annual_target);
        let ytd_target = monthly_to_ytd(&monthly_targets, month_num);
        let ytd_actual = monthly_to_ytd(&fill_missing(&input.actuals), month_num);
        let prior_ytd_actual = monthly_to_ytd(&fill_missing(&input.prior_actuals), month_num);
        let ratios = self.classify(ytd_actual, ytd_target, prior_ytd_actual);

        debug!(
            "Month {}: ytd actual {} vs target {} (prior {})",
            month_num, ytd_actual, ytd_target, prior_ytd_actual
        );

        PerformanceReport {
            month: month_num as u32,
            monthly_targets,
            quarterly_targets: monthly_to_quarterly(&monthly_targets),
            ytd_target,
            ytd_actual,
            prior_ytd_actual,
            achievement_rate: ratios.achievement_rate,
            achievement_status: ratios.achievement_status,
            growth_rate: ratios.growth_rate,
            growth_status: ratios.growth_status,
            progress: ProgressReport::compute(&self.weights, &input.prior_actuals, month_num),
        }
    }

    pub fn report_as_of(&self, input: &PerformanceInput, as_of: NaiveDate) -> PerformanceReport {
        self.report(input, reporting_month(as_of))
    }

    /// Rolls every entry up by group and product and classifies each bucket.
    pub fn summarize(
        &self,
        directory: &OrganizationDirectory,
        entries: &[PortfolioEntry],
        month: i32,
    ) -> BTreeMap<BucketKey, BucketSummary> {
        let mut annual = Vec::with_capacity(entries.len());
        let mut ytd_target = Vec::with_capacity(entries.len());
        let mut ytd_actual = Vec::with_capacity(entries.len());
        let mut prior_ytd = Vec::with_capacity(entries.len());

        for entry in entries {
            let report = self.report(&entry.input, month);
            let key = (entry.org.as_str(), entry.product.as_str());
            annual.push((key.0, key.1, entry.input.annual_target));
            ytd_target.push((key.0, key.1, report.ytd_target));
            ytd_actual.push((key.0, key.1, report.ytd_actual));
            prior_ytd.push((key.0, key.1, report.prior_ytd_actual));
        }

        let annual = crosstab(directory, annual);
        let ytd_target = crosstab(directory, ytd_target);
        let ytd_actual = crosstab(directory, ytd_actual);
        let prior_ytd = crosstab(directory, prior_ytd);

        let summaries: BTreeMap<BucketKey, BucketSummary> = annual
            .into_iter()
            .map(|(key, annual_target)| {
                let target = ytd_target.get(&key).copied().unwrap_or(0.0);
                let actual = ytd_actual.get(&key).copied().unwrap_or(0.0);
                let prior = prior_ytd.get(&key).copied().unwrap_or(0.0);
                let ratios = self.classify(actual, target, prior);

                let summary = BucketSummary {
                    annual_target,
                    ytd_target: target,
                    ytd_actual: actual,
                    prior_ytd_actual: prior,
                    achievement_rate: ratios.achievement_rate,
                    achievement_status: ratios.achievement_status,
                    growth_rate: ratios.growth_rate,
                    growth_status: ratios.growth_status,
                };
                (key, summary)
            })
            .collect();

        info!(
            "Summarized {} entries into {} buckets through month {}",
            entries.len(),
            summaries.len(),
            clamp_month(month)
        );

        summaries
    }

    fn classify(&self, actual: f64, target: f64, prior: f64) -> Ratios {
        let achievement = achievement_rate(actual, target);
        let growth = growth_rate(actual, prior);
        Ratios {
            achievement_rate: achievement,
            achievement_status: achievement.map(|r| achievement_status(r, &self.thresholds)),
            growth_rate: growth,
            growth_status: growth.map(|r| growth_status(r, &self.thresholds)),
        }
    }
}

fn crosstab(
    directory: &OrganizationDirectory,
    values: Vec<(&str, &str, f64)>,
) -> BTreeMap<BucketKey, f64> {
    let rows: Vec<FactRow> = directory.fact_rows(values);
    aggregate_to_group_and_all(&rows)
}
