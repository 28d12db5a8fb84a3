//! Scoring results.

use std::fmt;

use crate::topology::Topology;

/// The five criteria a topology is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Criterion {
    /// How well the topology suits the deployment's scale category.
    ScaleFit,
    /// How well the topology suits the budget category.
    BudgetFit,
    /// How well the topology suits the power category.
    PowerFit,
    /// How well the topology suits the workload kind.
    WorkloadFit,
    /// How well the topology's growth headroom suits the scale category.
    ScalabilityFit,
}

impl Criterion {
    /// All criteria in breakdown order.
    pub const ALL: [Criterion; 5] = [
        Criterion::ScaleFit,
        Criterion::BudgetFit,
        Criterion::PowerFit,
        Criterion::WorkloadFit,
        Criterion::ScalabilityFit,
    ];

    /// Display name used in score breakdowns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::ScaleFit => "Scale Match",
            Criterion::BudgetFit => "Budget Match",
            Criterion::PowerFit => "Power Match",
            Criterion::WorkloadFit => "Workload Suitability",
            Criterion::ScalabilityFit => "Scalability Match",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One criterion's contribution to a topology's total score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriterionScore {
    /// The criterion being scored.
    pub criterion: Criterion,

    /// The raw fit score from the match matrix, in [0, 1].
    pub score: f64,

    /// The weight applied to this criterion.
    pub weight: f64,
}

impl CriterionScore {
    /// The criterion's weighted contribution to the total.
    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

/// A topology's total weighted score with its per-criterion breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopologyScore {
    /// The topology being scored.
    pub topology: Topology,

    /// The weighted sum over all criteria, in [0, 1] when the weights
    /// sum to 1.
    pub total: f64,

    /// Per-criterion scores in [`Criterion::ALL`] order.
    pub breakdown: Vec<CriterionScore>,
}

impl TopologyScore {
    /// Looks up one criterion's entry in the breakdown.
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionScore> {
        self.breakdown.iter().find(|c| c.criterion == criterion)
    }
}
