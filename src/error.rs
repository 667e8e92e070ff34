use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid weight count: expected 12 monthly weights, got {actual}")]
    InvalidWeightCount { actual: usize },

    #[error("Invalid weight {value} for month {month}: weights must be finite and non-negative")]
    NegativeWeight { month: usize, value: f64 },

    #[error("Invalid weights: monthly weights must sum to 1.0 (got {actual_sum})")]
    InvalidWeights { actual_sum: f64 },

    #[error("{0}")]
    InvalidThreshold(ThresholdViolation),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A threshold constraint that failed validation.
///
/// `Display` renders as `"<CODE>: <details>"`, so callers that only keep
/// the message can still recover the code by splitting on `':'`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdViolation {
    #[error("NON_FINITE_THRESHOLD: {field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("ACHIEVEMENT_GOOD_MIN: achievement.good_min must be greater than 1.0 (got {good_min})")]
    AchievementGoodMin { good_min: f64 },

    #[error(
        "ACHIEVEMENT_WARNING_MIN: achievement.warning_min must be less than 1.0 (got {warning_min})"
    )]
    AchievementWarningMin { warning_min: f64 },

    #[error("GROWTH_ORDER: growth.good_min ({good_min}) must be greater than growth.warning_min ({warning_min})")]
    GrowthOrder { good_min: f64, warning_min: f64 },
}

impl ThresholdViolation {
    /// Stable machine-readable code for this violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "NON_FINITE_THRESHOLD",
            Self::AchievementGoodMin { .. } => "ACHIEVEMENT_GOOD_MIN",
            Self::AchievementWarningMin { .. } => "ACHIEVEMENT_WARNING_MIN",
            Self::GrowthOrder { .. } => "GROWTH_ORDER",
        }
    }
}

impl From<ThresholdViolation> for TrackerError {
    fn from(violation: ThresholdViolation) -> Self {
        Self::InvalidThreshold(violation)
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefix_matches_code() {
        let violations = [
            ThresholdViolation::NonFinite {
                field: "growth.good_min",
                value: f64::NAN,
            },
            ThresholdViolation::AchievementGoodMin { good_min: 0.9 },
            ThresholdViolation::AchievementWarningMin { warning_min: 1.2 },
            ThresholdViolation::GrowthOrder {
                good_min: 0.0,
                warning_min: 0.1,
            },
        ];

        for violation in violations {
            let message = TrackerError::from(violation.clone()).to_string();
            let code = message.split(':').next().unwrap();
            assert_eq!(code, violation.code());
        }
    }
}
