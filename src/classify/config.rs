//! Classification thresholds.
//!
//! All threshold values are tunable heuristics, not laws: the defaults come
//! from industry sizing practice (small shops under 20 racks rarely justify
//! a fabric; beyond 100 racks scalability dominates) and can be overridden
//! per deployment context via the builders or, with the `serde` feature,
//! loaded from configuration files.

use crate::error::PlanError;

/// Thresholds for the scale classification.
///
/// A deployment is *Small* when `racks < small_max_racks` OR
/// `servers < small_max_servers`; otherwise *Large* when
/// `racks >= large_min_racks` OR `servers >= large_min_servers`;
/// otherwise *Medium*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleThresholds {
    /// Below this rack count the deployment is Small.
    pub small_max_racks: u32,
    /// Below this server count the deployment is Small.
    pub small_max_servers: u32,
    /// At or above this rack count the deployment is Large.
    pub large_min_racks: u32,
    /// At or above this server count the deployment is Large.
    pub large_min_servers: u32,
}

impl Default for ScaleThresholds {
    fn default() -> Self {
        Self {
            small_max_racks: 20,
            small_max_servers: 200,
            large_min_racks: 100,
            large_min_servers: 1000,
        }
    }
}

/// A low/high band over one numeric dimension.
///
/// Values below `low_max` classify as Low, values at or above `high_min`
/// as High, everything between as Medium. The boundary policy is strict:
/// a value exactly equal to `low_max` is NOT Low.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandThresholds {
    /// Exclusive upper bound of the Low band.
    pub low_max: f64,
    /// Inclusive lower bound of the High band.
    pub high_min: f64,
}

/// Complete threshold configuration for the classifier.
///
/// # Examples
///
/// ```
/// use topoplan::classify::{BandThresholds, ClassifyConfig};
///
/// let config = ClassifyConfig::default()
///     .with_budget_band(BandThresholds { low_max: 150_000.0, high_min: 750_000.0 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifyConfig {
    /// Scale thresholds over racks and servers.
    pub scale: ScaleThresholds,
    /// Budget band in USD.
    pub budget: BandThresholds,
    /// Power band in kilowatts.
    pub power: BandThresholds,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            scale: ScaleThresholds::default(),
            budget: BandThresholds {
                low_max: 100_000.0,
                high_min: 500_000.0,
            },
            power: BandThresholds {
                low_max: 50.0,
                high_min: 200.0,
            },
        }
    }
}

impl ClassifyConfig {
    /// Sets the scale thresholds.
    pub fn with_scale(mut self, scale: ScaleThresholds) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the budget band (USD).
    pub fn with_budget_band(mut self, band: BandThresholds) -> Self {
        self.budget = band;
        self
    }

    /// Sets the power band (kW).
    pub fn with_power_band(mut self, band: BandThresholds) -> Self {
        self.power = band;
        self
    }

    /// Validates band coherence.
    ///
    /// The classifier itself is total for any thresholds, but an incoherent
    /// configuration (a Low band reaching above the High band, zero or
    /// inverted scale thresholds, non-finite bounds) silently empties the
    /// Medium band and is almost certainly a configuration mistake, so it
    /// is rejected at construction time.
    pub fn validate(&self) -> Result<(), PlanError> {
        let s = &self.scale;
        if s.small_max_racks == 0 || s.small_max_servers == 0 {
            return Err(PlanError::ThresholdOrder("scale thresholds must be positive"));
        }
        if s.small_max_racks > s.large_min_racks {
            return Err(PlanError::ThresholdOrder(
                "scale small_max_racks exceeds large_min_racks",
            ));
        }
        if s.small_max_servers > s.large_min_servers {
            return Err(PlanError::ThresholdOrder(
                "scale small_max_servers exceeds large_min_servers",
            ));
        }
        validate_band(
            &self.budget,
            "budget band is not finite",
            "budget low_max exceeds high_min",
        )?;
        validate_band(
            &self.power,
            "power band is not finite",
            "power low_max exceeds high_min",
        )?;
        Ok(())
    }
}

fn validate_band(
    band: &BandThresholds,
    non_finite: &'static str,
    inverted: &'static str,
) -> Result<(), PlanError> {
    if !band.low_max.is_finite() || !band.high_min.is_finite() {
        return Err(PlanError::ThresholdOrder(non_finite));
    }
    if band.low_max > band.high_min {
        return Err(PlanError::ThresholdOrder(inverted));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifyConfig::default();
        assert_eq!(config.scale.small_max_racks, 20);
        assert_eq!(config.scale.small_max_servers, 200);
        assert_eq!(config.scale.large_min_racks, 100);
        assert_eq!(config.scale.large_min_servers, 1000);
        assert!((config.budget.low_max - 100_000.0).abs() < 1e-10);
        assert!((config.budget.high_min - 500_000.0).abs() < 1e-10);
        assert!((config.power.low_max - 50.0).abs() < 1e-10);
        assert!((config.power.high_min - 200.0).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ClassifyConfig::default()
            .with_scale(ScaleThresholds {
                small_max_racks: 10,
                small_max_servers: 100,
                large_min_racks: 50,
                large_min_servers: 500,
            })
            .with_power_band(BandThresholds {
                low_max: 30.0,
                high_min: 90.0,
            });
        assert_eq!(config.scale.large_min_racks, 50);
        assert!((config.power.high_min - 90.0).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    // ---- Validation ----

    #[test]
    fn test_validate_zero_scale_threshold() {
        let config = ClassifyConfig::default().with_scale(ScaleThresholds {
            small_max_racks: 0,
            small_max_servers: 200,
            large_min_racks: 100,
            large_min_servers: 1000,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_scale_band() {
        let config = ClassifyConfig::default().with_scale(ScaleThresholds {
            small_max_racks: 200,
            small_max_servers: 200,
            large_min_racks: 100,
            large_min_servers: 1000,
        });
        assert_eq!(
            config.validate().unwrap_err(),
            PlanError::ThresholdOrder("scale small_max_racks exceeds large_min_racks")
        );
    }

    #[test]
    fn test_validate_inverted_budget_band() {
        let config = ClassifyConfig::default().with_budget_band(BandThresholds {
            low_max: 600_000.0,
            high_min: 500_000.0,
        });
        assert_eq!(
            config.validate().unwrap_err(),
            PlanError::ThresholdOrder("budget low_max exceeds high_min")
        );
    }

    #[test]
    fn test_validate_non_finite_power_band() {
        let config = ClassifyConfig::default().with_power_band(BandThresholds {
            low_max: f64::NAN,
            high_min: 200.0,
        });
        assert_eq!(
            config.validate().unwrap_err(),
            PlanError::ThresholdOrder("power band is not finite")
        );
    }

    #[test]
    fn test_equal_band_bounds_are_coherent() {
        // low_max == high_min leaves an empty Medium band, which is legal.
        let config = ClassifyConfig::default().with_budget_band(BandThresholds {
            low_max: 250_000.0,
            high_min: 250_000.0,
        });
        assert!(config.validate().is_ok());
    }
}
