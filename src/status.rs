use crate::schema::{StatusTier, ThresholdRule};

/// Classifies actual / target. Checks run top-down: good, normal (at or
/// above plan), warning, danger.
pub fn achievement_status(rate: f64, thresholds: &ThresholdRule) -> StatusTier {
    let rule = &thresholds.achievement;
    if rate >= rule.good_min {
        StatusTier::Good
    } else if rate >= 1.0 {
        StatusTier::Normal
    } else if rate >= rule.warning_min {
        StatusTier::Warning
    } else {
        StatusTier::Danger
    }
}

/// Classifies (current - prior) / prior. Any non-negative growth below
/// `warning_min` is still only a warning; shrinking is danger.
pub fn growth_status(rate: f64, thresholds: &ThresholdRule) -> StatusTier {
    let rule = &thresholds.growth;
    if rate >= rule.good_min {
        StatusTier::Good
    } else if rate >= rule.warning_min {
        StatusTier::Normal
    } else if rate >= 0.0 {
        StatusTier::Warning
    } else {
        StatusTier::Danger
    }
}

pub fn achievement_rate(actual: f64, target: f64) -> Option<f64> {
    if target == 0.0 || !target.is_finite() {
        return None;
    }
    Some(actual / target).filter(|rate| rate.is_finite())
}

pub fn growth_rate(current: f64, prior: f64) -> Option<f64> {
    if prior == 0.0 || !prior.is_finite() {
        return None;
    }
    Some((current - prior) / prior).filter(|rate| rate.is_finite())
}
