//! Configuration checks run before weights or thresholds are used.
//!
//! Configuration is operator-controlled, so every violation here is an
//! error. Runtime data gaps are handled elsewhere and never fail.

use crate::error::{Result, ThresholdViolation, TrackerError};
use crate::schema::{ThresholdRule, TrackerConfig};
use crate::seasonality::get_profile_weights;
use log::debug;
use serde::Serialize;
use std::ops::Index;

/// Maximum allowed deviation of a weight vector's sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Twelve monthly weights (January first) that passed [`validate_weights`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector([f64; 12]);

impl WeightVector {
    pub fn new(weights: &[f64]) -> Result<Self> {
        validate_weights(weights)?;
        let mut values = [0.0; 12];
        values.copy_from_slice(weights);
        Ok(Self(values))
    }

    /// Uniform 1/12 profile.
    pub fn uniform() -> Self {
        Self([1.0 / 12.0; 12])
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<usize> for WeightVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = TrackerError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::new(&weights)
    }
}

pub fn validate_weights(weights: &[f64]) -> Result<()> {
    if weights.len() != 12 {
        return Err(TrackerError::InvalidWeightCount {
            actual: weights.len(),
        });
    }

    if let Some((idx, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(TrackerError::NegativeWeight {
            month: idx + 1,
            value,
        });
    }

    let actual_sum: f64 = weights.iter().sum();
    if (actual_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(TrackerError::InvalidWeights { actual_sum });
    }

    Ok(())
}

pub fn validate_thresholds(rule: &ThresholdRule) -> Result<()> {
    let fields = [
        ("achievement.good_min", rule.achievement.good_min),
        ("achievement.warning_min", rule.achievement.warning_min),
        ("growth.good_min", rule.growth.good_min),
        ("growth.warning_min", rule.growth.warning_min),
    ];
    if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ThresholdViolation::NonFinite { field, value }.into());
    }

    if rule.achievement.good_min <= 1.0 {
        return Err(ThresholdViolation::AchievementGoodMin {
            good_min: rule.achievement.good_min,
        }
        .into());
    }

    if rule.achievement.warning_min >= 1.0 {
        return Err(ThresholdViolation::AchievementWarningMin {
            warning_min: rule.achievement.warning_min,
        }
        .into());
    }

    if rule.growth.good_min <= rule.growth.warning_min {
        return Err(ThresholdViolation::GrowthOrder {
            good_min: rule.growth.good_min,
            warning_min: rule.growth.warning_min,
        }
        .into());
    }

    Ok(())
}

/// Validates a whole configuration and returns its resolved weights.
pub fn validate_config(config: &TrackerConfig) -> Result<WeightVector> {
    let weights = get_profile_weights(&config.weights).inspect_err(|e| {
        debug!("Rejected weight profile {:?}: {}", config.weights, e);
    })?;

    validate_thresholds(&config.thresholds).inspect_err(|e| {
        debug!("Rejected threshold rule {:?}: {}", config.thresholds, e);
    })?;

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RatioThresholds;

    fn rule(a_good: f64, a_warn: f64, g_good: f64, g_warn: f64) -> ThresholdRule {
        ThresholdRule {
            achievement: RatioThresholds {
                good_min: a_good,
                warning_min: a_warn,
            },
            growth: RatioThresholds {
                good_min: g_good,
                warning_min: g_warn,
            },
        }
    }

    fn violation_code(result: Result<()>) -> &'static str {
        match result {
            Err(TrackerError::InvalidThreshold(v)) => v.code(),
            other => panic!("expected threshold violation, got {:?}", other),
        }
    }

    #[test]
    fn test_uniform_weights_pass() {
        assert!(validate_weights(&[1.0 / 12.0; 12]).is_ok());
    }

    #[test]
    fn test_sum_within_tolerance_band_passes() {
        let mut weights = [1.0 / 12.0; 12];
        weights[0] += 5e-7;
        assert!(validate_weights(&weights).is_ok());

        weights[0] -= 1e-6;
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_sum_outside_band_reports_actual_sum() {
        let mut weights = [1.0 / 12.0; 12];
        weights[11] += 2e-6;

        match validate_weights(&weights) {
            Err(TrackerError::InvalidWeights { actual_sum }) => {
                assert!((actual_sum - (1.0 + 2e-6)).abs() < 1e-9);
            }
            other => panic!("expected sum mismatch, got {:?}", other),
        }

        match validate_weights(&[0.1; 12]) {
            Err(TrackerError::InvalidWeights { actual_sum }) => {
                assert!((actual_sum - 1.2).abs() < 1e-9);
            }
            other => panic!("expected sum mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        match validate_weights(&[0.5, 0.5]) {
            Err(TrackerError::InvalidWeightCount { actual }) => assert_eq!(actual, 2),
            other => panic!("expected count error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut weights = [1.0 / 12.0; 12];
        weights[2] = -0.1;
        weights[3] += 0.1 + 1.0 / 12.0;

        match validate_weights(&weights) {
            Err(TrackerError::NegativeWeight { month, value }) => {
                assert_eq!(month, 3);
                assert_eq!(value, -0.1);
            }
            other => panic!("expected negative weight error, got {:?}", other),
        }
    }

    #[test]
    fn test_weight_vector_is_never_normalized() {
        assert!(WeightVector::new(&[0.2; 12]).is_err());
        assert!(WeightVector::try_from(vec![1.0 / 12.0; 12]).is_ok());
    }

    #[test]
    fn test_default_thresholds_valid() {
        assert!(validate_thresholds(&ThresholdRule::default()).is_ok());
    }

    #[test]
    fn test_threshold_violation_codes() {
        assert_eq!(
            violation_code(validate_thresholds(&rule(1.0, 0.95, 0.1, 0.0))),
            "ACHIEVEMENT_GOOD_MIN"
        );
        assert_eq!(
            violation_code(validate_thresholds(&rule(1.05, 1.0, 0.1, 0.0))),
            "ACHIEVEMENT_WARNING_MIN"
        );
        assert_eq!(
            violation_code(validate_thresholds(&rule(1.05, 0.95, 0.05, 0.05))),
            "GROWTH_ORDER"
        );
        assert_eq!(
            violation_code(validate_thresholds(&rule(f64::INFINITY, 0.95, 0.1, 0.0))),
            "NON_FINITE_THRESHOLD"
        );
    }

    #[test]
    fn test_first_failing_constraint_wins() {
        assert_eq!(
            violation_code(validate_thresholds(&rule(0.9, 1.1, 0.0, 0.5))),
            "ACHIEVEMENT_GOOD_MIN"
        );
    }

    #[test]
    fn test_validate_config_resolves_weights() {
        let weights = validate_config(&TrackerConfig::default()).unwrap();
        assert_eq!(weights, WeightVector::uniform());
    }
}
