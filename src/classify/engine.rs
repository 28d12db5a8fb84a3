//! The threshold classifier.

use super::config::ClassifyConfig;
use super::types::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
use crate::error::PlanError;
use crate::inputs::PlannerInputs;
use tracing::debug;

/// Converts raw numeric inputs into ordinal categories.
///
/// A pure, total function of its configuration and inputs: identical inputs
/// always produce the identical [`Classification`].
///
/// # Examples
///
/// ```
/// use topoplan::classify::{Classifier, ScaleCategory};
///
/// let classifier = Classifier::default();
/// // 19 racks is below the small_max_racks default of 20, so the
/// // deployment is Small no matter how many servers it has.
/// assert_eq!(classifier.classify_scale(19, 5000), ScaleCategory::Small);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    /// Creates a classifier from a validated configuration.
    ///
    /// # Errors
    ///
    /// [`PlanError::ThresholdOrder`] when the configuration is incoherent.
    pub fn new(config: ClassifyConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The thresholds this classifier applies.
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Classifies deployment scale from rack and server counts.
    ///
    /// Evaluation order matters and first match wins:
    /// Small when EITHER count is under its small threshold, then Large
    /// when EITHER count reaches its large threshold, else Medium.
    pub fn classify_scale(&self, racks: u32, servers: u32) -> ScaleCategory {
        let s = &self.config.scale;
        if racks < s.small_max_racks || servers < s.small_max_servers {
            ScaleCategory::Small
        } else if racks >= s.large_min_racks || servers >= s.large_min_servers {
            ScaleCategory::Large
        } else {
            ScaleCategory::Medium
        }
    }

    /// Classifies the budget level (USD).
    ///
    /// A budget exactly equal to `low_max` is not Low; it falls through to
    /// the High check and then Medium.
    pub fn classify_budget(&self, budget_usd: f64) -> BudgetCategory {
        let b = &self.config.budget;
        if budget_usd < b.low_max {
            BudgetCategory::Low
        } else if budget_usd >= b.high_min {
            BudgetCategory::High
        } else {
            BudgetCategory::Medium
        }
    }

    /// Classifies the power level (kW), with the same boundary policy as
    /// the budget band.
    pub fn classify_power(&self, power_kw: f64) -> PowerCategory {
        let p = &self.config.power;
        if power_kw < p.low_max {
            PowerCategory::Low
        } else if power_kw >= p.high_min {
            PowerCategory::High
        } else {
            PowerCategory::Medium
        }
    }

    /// Classifies all three dimensions of one set of inputs.
    pub fn classify(&self, inputs: &PlannerInputs) -> Classification {
        let classification = Classification {
            scale: self.classify_scale(inputs.racks(), inputs.servers()),
            budget: self.classify_budget(inputs.budget_usd()),
            power: self.classify_power(inputs.power_kw()),
        };
        debug!(
            racks = inputs.racks(),
            servers = inputs.servers(),
            budget = inputs.budget_usd(),
            power = inputs.power_kw(),
            ?classification,
            "classified inputs"
        );
        classification
    }
}

impl Default for Classifier {
    /// A classifier with the default thresholds (always coherent).
    fn default() -> Self {
        Self {
            config: ClassifyConfig::default(),
        }
    }
}
