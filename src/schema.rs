use crate::error::Result;
use crate::validator::validate_config;
use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    #[default]
    #[schemars(description = "Keep full floating point precision for every month.")]
    None,

    #[schemars(
        description = "Round each month to the nearest 0.01. The annual total is preserved by reconciling the rounding residual into December."
    )]
    TwoDecimal,

    #[schemars(
        description = "Round each month to the nearest whole unit. The annual total is preserved by reconciling the rounding residual into December."
    )]
    Integer,
}

/// Two breakpoints splitting a ratio into four status tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RatioThresholds {
    #[schemars(description = "Ratios at or above this value are classified as good.")]
    pub good_min: f64,

    #[schemars(
        description = "Lower breakpoint. For achievement, ratios below it are danger; for growth, ratios at or above it are normal."
    )]
    pub warning_min: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ThresholdRule {
    #[schemars(
        description = "Breakpoints for actual / target. good_min must be above 1.0 and warning_min below 1.0."
    )]
    pub achievement: RatioThresholds,

    #[schemars(
        description = "Breakpoints for (current - prior) / prior. good_min must be above warning_min."
    )]
    pub growth: RatioThresholds,
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self {
            achievement: RatioThresholds {
                good_min: 1.05,
                warning_min: 0.95,
            },
            growth: RatioThresholds {
                good_min: 0.10,
                warning_min: 0.0,
            },
        }
    }
}

/// Discretized classification of a ratio, ordered best to worst.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Good,
    Normal,
    Warning,
    Danger,
}

impl StatusTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum WeightProfile {
    #[default]
    #[schemars(description = "Evenly distributed across all 12 months (8.33% per month).")]
    Flat,

    #[schemars(
        description = "Retail pattern: modest Jan-Oct, rising November and a large December peak (30%)."
    )]
    RetailPeak,

    #[schemars(
        description = "Summer pattern: low in Q1 (5% each), high April-August (12% each), moderate autumn, low December."
    )]
    SummerHigh,

    #[schemars(
        description = "Growth pattern: back-loaded, starting near 6% in January and ramping to about 10% in December."
    )]
    SaasGrowth,

    #[schemars(
        description = "Custom 12-value array of monthly weights, January first. Must be non-negative and sum to 1.0 within 1e-6; it is never normalized."
    )]
    Custom(Vec<f64>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct TrackerConfig {
    #[serde(default)]
    #[schemars(description = "Monthly weight profile used to allocate annual targets.")]
    pub weights: WeightProfile,

    #[serde(default)]
    #[schemars(description = "Status breakpoints for achievement and growth ratios.")]
    pub thresholds: ThresholdRule,

    #[serde(default)]
    #[schemars(description = "Rounding applied to allocated monthly targets.")]
    pub rounding: RoundingMode,
}

impl TrackerConfig {
    /// Parses and validates a configuration document.
    ///
    /// Invalid weights or thresholds are rejected here so that a bad
    /// document never reaches the allocator.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded tracker configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(TrackerConfig)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
