//! Planner configuration.

use crate::classify::ClassifyConfig;
use crate::error::PlanError;
use crate::scoring::ScoringWeights;

/// Complete configuration for a [`Planner`](super::Planner).
///
/// Bundles the classification thresholds and the scoring weights. The
/// defaults reproduce the standard decision behavior; both parts can be
/// overridden independently.
///
/// # Examples
///
/// ```
/// use topoplan::classify::{BandThresholds, ClassifyConfig};
/// use topoplan::planner::PlannerConfig;
///
/// let config = PlannerConfig::default().with_thresholds(
///     ClassifyConfig::default().with_budget_band(BandThresholds {
///         low_max: 50_000.0,
///         high_min: 250_000.0,
///     }),
/// );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Classification thresholds for scale, budget, and power.
    pub thresholds: ClassifyConfig,

    /// Weights for the five scoring criteria.
    pub weights: ScoringWeights,
}

impl PlannerConfig {
    /// Replaces the classification thresholds.
    pub fn with_thresholds(mut self, thresholds: ClassifyConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replaces the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates both parts of the configuration.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.thresholds.validate()?;
        self.weights.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_weights_fail_validation() {
        let config =
            PlannerConfig::default().with_weights(ScoringWeights::default().with_scale(0.9));
        assert!(matches!(
            config.validate(),
            Err(PlanError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_invalid_thresholds_fail_validation() {
        use crate::classify::BandThresholds;

        let config = PlannerConfig::default().with_thresholds(
            ClassifyConfig::default().with_power_band(BandThresholds {
                low_max: 300.0,
                high_min: 200.0,
            }),
        );
        assert!(matches!(
            config.validate(),
            Err(PlanError::ThresholdOrder(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = PlannerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weights, config.weights);
        assert_eq!(back.thresholds.scale, config.thresholds.scale);
    }
}
