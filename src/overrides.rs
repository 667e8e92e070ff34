use crate::error::Result;
use crate::schema::{RoundingMode, ThresholdRule, TrackerConfig, WeightProfile};
use crate::validator::validate_config;
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An operator edit to a [`TrackerConfig`]. Unset fields keep the base value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ConfigOverrides {
    #[serde(default)]
    #[schemars(description = "Replacement weight profile. Re-validated before it is applied.")]
    pub weights: Option<WeightProfile>,

    #[serde(default)]
    #[schemars(description = "Replacement status thresholds. Re-validated before they are applied.")]
    pub thresholds: Option<ThresholdRule>,

    #[serde(default)]
    #[schemars(description = "Replacement rounding mode for allocated monthly targets.")]
    pub rounding: Option<RoundingMode>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.weights.is_none() && self.thresholds.is_none() && self.rounding.is_none()
    }

    /// Applies the edit to a base configuration, returning a new configuration.
    ///
    /// The merged result is validated as a whole. On failure the error is
    /// returned and the caller keeps using `base`, which is never touched.
    pub fn apply(&self, base: &TrackerConfig) -> Result<TrackerConfig> {
        let mut config = base.clone();

        if let Some(weights) = &self.weights {
            config.weights = weights.clone();
        }
        if let Some(thresholds) = self.thresholds {
            config.thresholds = thresholds;
        }
        if let Some(rounding) = self.rounding {
            config.rounding = rounding;
        }

        if let Err(e) = validate_config(&config) {
            debug!("Refusing configuration edit: {}", e);
            return Err(e);
        }

        if !self.is_empty() {
            info!("Applied configuration edit: {:?}", self);
        }

        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
