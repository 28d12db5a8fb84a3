//! The weighted scorer.

use std::cmp::Ordering;

use tracing::trace;

use super::config::ScoringWeights;
use super::matrices;
use super::types::{Criterion, CriterionScore, TopologyScore};
use crate::classify::Classification;
use crate::error::PlanError;
use crate::inputs::PlannerInputs;
use crate::topology::Topology;

/// Scores and ranks topologies by weighted linear combination.
///
/// Each topology receives a fit score per criterion from the fixed
/// match matrices; the total is the weight-scaled sum. The scorer runs
/// independently of the rule engine and never picks the recommendation
/// itself; its ranking is a second opinion.
///
/// # Examples
///
/// ```
/// use topoplan::classify::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
/// use topoplan::inputs::{PlannerInputs, WorkloadKind};
/// use topoplan::scoring::Scorer;
/// use topoplan::topology::Topology;
///
/// let inputs = PlannerInputs::new(50, 600, 300_000.0, 100.0, WorkloadKind::WebServices)?;
/// let classification = Classification {
///     scale: ScaleCategory::Medium,
///     budget: BudgetCategory::Medium,
///     power: PowerCategory::Medium,
/// };
///
/// let ranking = Scorer::default().rank(&inputs, &classification);
/// assert_eq!(ranking[0].topology, Topology::LeafSpine);
/// # Ok::<(), topoplan::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    /// Creates a scorer from a validated weight set.
    pub fn new(weights: ScoringWeights) -> Result<Self, PlanError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Returns the configured weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores one topology against the inputs and their classification.
    ///
    /// The breakdown lists every criterion in [`Criterion::ALL`] order.
    pub fn score_topology(
        &self,
        topology: Topology,
        inputs: &PlannerInputs,
        classification: &Classification,
    ) -> TopologyScore {
        let breakdown: Vec<CriterionScore> = Criterion::ALL
            .iter()
            .map(|&criterion| {
                let score = match criterion {
                    Criterion::ScaleFit => matrices::scale_fit(topology, classification.scale),
                    Criterion::BudgetFit => matrices::budget_fit(topology, classification.budget),
                    Criterion::PowerFit => matrices::power_fit(topology, classification.power),
                    Criterion::WorkloadFit => matrices::workload_fit(topology, inputs.workload()),
                    Criterion::ScalabilityFit => {
                        matrices::scalability_fit(topology, classification.scale)
                    }
                };
                CriterionScore {
                    criterion,
                    score,
                    weight: self.weights.weight_for(criterion),
                }
            })
            .collect();

        let total: f64 = breakdown.iter().map(CriterionScore::weighted).sum();
        // Fit scores are in [0, 1] and weights are non-negative, so the
        // total cannot exceed the weight sum.
        debug_assert!(total >= 0.0 && total <= self.weights.sum() + 1e-9);
        trace!(topology = topology.as_str(), total, "scored topology");

        TopologyScore {
            topology,
            total,
            breakdown,
        }
    }

    /// Scores all topologies and returns them sorted by descending
    /// total.
    ///
    /// The sort is stable and candidates are generated in
    /// [`Topology::ALL`] order, so exact ties keep that order.
    pub fn rank(
        &self,
        inputs: &PlannerInputs,
        classification: &Classification,
    ) -> Vec<TopologyScore> {
        let mut scores: Vec<TopologyScore> = Topology::ALL
            .iter()
            .map(|&topology| self.score_topology(topology, inputs, classification))
            .collect();

        scores.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        scores
    }
}

impl Default for Scorer {
    fn default() -> Self {
        // The default weights always satisfy validate().
        Self {
            weights: ScoringWeights::default(),
        }
    }
}
