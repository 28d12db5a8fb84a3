//! Scoring weights configuration.

use super::types::Criterion;
use crate::error::PlanError;

/// How far the weight sum may drift from 1.0 before validation fails.
const SUM_TOLERANCE: f64 = 1e-3;

/// Relative importance of each scoring criterion.
///
/// The weights form a convex combination: each lies in [0, 1] and they
/// sum to 1.0 (within a small tolerance), so every weighted total stays
/// in [0, 1]. Validation enforces both properties; construction does
/// not, allowing adjusted weight sets to be built up before checking.
///
/// The defaults rank deployment size first, then budget, power,
/// workload, and growth headroom.
///
/// # Examples
///
/// ```
/// use topoplan::scoring::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert!((weights.sum() - 1.0).abs() < 1e-9);
/// assert!(weights.validate().is_ok());
///
/// // A budget-driven weighting.
/// let weights = ScoringWeights::default()
///     .with_scale(0.20)
///     .with_budget(0.35);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringWeights {
    /// Weight of the scale fit criterion.
    pub scale: f64,

    /// Weight of the budget fit criterion.
    pub budget: f64,

    /// Weight of the power fit criterion.
    pub power: f64,

    /// Weight of the workload fit criterion.
    pub workload: f64,

    /// Weight of the scalability fit criterion.
    pub scalability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            scale: 0.30,
            budget: 0.25,
            power: 0.20,
            workload: 0.15,
            scalability: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn with_scale(mut self, weight: f64) -> Self {
        self.scale = weight;
        self
    }

    pub fn with_budget(mut self, weight: f64) -> Self {
        self.budget = weight;
        self
    }

    pub fn with_power(mut self, weight: f64) -> Self {
        self.power = weight;
        self
    }

    pub fn with_workload(mut self, weight: f64) -> Self {
        self.workload = weight;
        self
    }

    pub fn with_scalability(mut self, weight: f64) -> Self {
        self.scalability = weight;
        self
    }

    /// Returns the weight for one criterion.
    pub fn weight_for(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::ScaleFit => self.scale,
            Criterion::BudgetFit => self.budget,
            Criterion::PowerFit => self.power,
            Criterion::WorkloadFit => self.workload,
            Criterion::ScalabilityFit => self.scalability,
        }
    }

    /// Returns the sum of all five weights.
    pub fn sum(&self) -> f64 {
        self.scale + self.budget + self.power + self.workload + self.scalability
    }

    /// Validates the weight set.
    ///
    /// Every weight must be a finite number in [0, 1] and the sum must
    /// be within 1e-3 of 1.0.
    pub fn validate(&self) -> Result<(), PlanError> {
        let named = [
            ("scale", self.scale),
            ("budget", self.budget),
            ("power", self.power),
            ("workload", self.workload),
            ("scalability", self.scalability),
        ];
        for (name, value) in named {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlanError::WeightRange { name, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(PlanError::WeightSum { sum });
        }
        Ok(())
    }
}
