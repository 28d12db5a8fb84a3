//! Rule evaluation products.

use crate::topology::Topology;

/// Identifies which of the three ordered rules selected the topology.
///
/// The rules form a decision tree evaluated top to bottom; exactly one
/// fires for any classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FiredRule {
    /// Rule 1: any constrained dimension (small scale, low budget, or
    /// low power) selects the cost-effective topology.
    CostConstrained,

    /// Rule 2: large scale, high budget, and high power all at once
    /// select the maximum-performance topology.
    ResourceRich,

    /// Rule 3: everything else falls through to the balanced default.
    BalancedDefault,
}

impl FiredRule {
    /// Returns the rule's position in the evaluation order (1, 2, or 3).
    pub fn number(&self) -> u8 {
        match self {
            FiredRule::CostConstrained => 1,
            FiredRule::ResourceRich => 2,
            FiredRule::BalancedDefault => 3,
        }
    }

    /// Returns the topology this rule selects when it fires.
    pub fn topology(&self) -> Topology {
        match self {
            FiredRule::CostConstrained => Topology::ThreeTier,
            FiredRule::ResourceRich => Topology::FatTree,
            FiredRule::BalancedDefault => Topology::LeafSpine,
        }
    }

    /// Returns why each of the two non-selected topologies was passed
    /// over, in [`Topology::ALL`] order.
    pub fn rejection_reasons(&self) -> [(Topology, &'static str); 2] {
        match self {
            FiredRule::CostConstrained => [
                (
                    Topology::LeafSpine,
                    "Not selected because deployment has constraints (small scale, \
                     low budget, or low power) that favor simpler topology",
                ),
                (
                    Topology::FatTree,
                    "Not selected because Fat-Tree requires large scale AND high \
                     budget AND high power, which is not met",
                ),
            ],
            FiredRule::ResourceRich => [
                (
                    Topology::ThreeTier,
                    "Not selected because Three-Tier is designed for smaller \
                     deployments and would be a bottleneck at this scale",
                ),
                (
                    Topology::LeafSpine,
                    "Not selected because deployment has sufficient resources \
                     (large scale, high budget, high power) to support Fat-Tree's \
                     superior performance",
                ),
            ],
            FiredRule::BalancedDefault => [
                (
                    Topology::ThreeTier,
                    "Not selected because deployment scale/budget/power exceeds \
                     Three-Tier's optimal range",
                ),
                (
                    Topology::FatTree,
                    "Not selected because Fat-Tree requires all three conditions \
                     (large scale AND high budget AND high power) to be met \
                     simultaneously",
                ),
            ],
        }
    }
}

/// The outcome of one pass over the rule tree.
///
/// Carries both the selected topology and the firing metadata so that
/// the selection and its explanation always come from the same
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleDecision {
    /// The topology the fired rule selects.
    pub topology: Topology,

    /// Which rule fired.
    pub fired_rule: FiredRule,

    /// The conditions that made the rule fire, as fixed display
    /// strings in scale, budget, power order.
    pub triggering_conditions: Vec<&'static str>,
}

impl RuleDecision {
    /// Converts the decision into its explanation, attaching the
    /// per-rule rejection reasons for the two losing topologies.
    pub fn into_explanation(self) -> RuleExplanation {
        let rejection_reasons = self.fired_rule.rejection_reasons();
        RuleExplanation {
            fired_rule: self.fired_rule,
            triggering_conditions: self.triggering_conditions,
            rejection_reasons,
        }
    }
}

/// Explains a rule decision: which rule fired, what triggered it, and
/// why the other two topologies were not chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleExplanation {
    /// Which rule fired.
    pub fired_rule: FiredRule,

    /// The conditions that made the rule fire.
    pub triggering_conditions: Vec<&'static str>,

    /// The two non-selected topologies paired with the reason each was
    /// passed over, in [`Topology::ALL`] order.
    pub rejection_reasons: [(Topology, &'static str); 2],
}
