//! The ordered rule tree.

use tracing::debug;

use super::types::{FiredRule, RuleDecision, RuleExplanation};
use crate::classify::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
use crate::topology::Topology;

const COND_SMALL_SCALE: &str = "Small scale";
const COND_LOW_BUDGET: &str = "Low budget";
const COND_LOW_POWER: &str = "Low power";
const COND_LARGE_SCALE: &str = "Large scale";
const COND_HIGH_BUDGET: &str = "High budget";
const COND_HIGH_POWER: &str = "High power";
const COND_MIXED: &str = "Medium scale/budget/power or mixed conditions";

/// Selects a topology from a classification via three ordered rules.
///
/// The rules are evaluated top to bottom and the first match wins:
///
/// 1. Small scale OR low budget OR low power selects Three-Tier. Any
///    single constrained dimension is enough.
/// 2. Large scale AND high budget AND high power selects Fat-Tree. All
///    three resources must be there.
/// 3. Everything else selects Leaf-Spine.
///
/// Together the rules are exhaustive, so evaluation always produces a
/// decision. The engine holds no state; the rule set is fixed.
///
/// # Examples
///
/// ```
/// use topoplan::classify::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
/// use topoplan::rules::RuleEngine;
/// use topoplan::topology::Topology;
///
/// let classification = Classification {
///     scale: ScaleCategory::Small,
///     budget: BudgetCategory::Medium,
///     power: PowerCategory::Medium,
/// };
/// let decision = RuleEngine::evaluate(&classification);
/// assert_eq!(decision.topology, Topology::ThreeTier);
/// assert_eq!(decision.fired_rule.number(), 1);
/// assert_eq!(decision.triggering_conditions, vec!["Small scale"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Runs the rule tree once and returns the full decision.
    ///
    /// This is the single place the rule conditions are tested;
    /// [`suggest`](Self::suggest) and [`explain`](Self::explain) are
    /// projections of its result.
    pub fn evaluate(classification: &Classification) -> RuleDecision {
        // Rule 1: any constrained dimension forces the simple topology.
        let mut conditions = Vec::new();
        if classification.scale == ScaleCategory::Small {
            conditions.push(COND_SMALL_SCALE);
        }
        if classification.budget == BudgetCategory::Low {
            conditions.push(COND_LOW_BUDGET);
        }
        if classification.power == PowerCategory::Low {
            conditions.push(COND_LOW_POWER);
        }
        if !conditions.is_empty() {
            return Self::decide(FiredRule::CostConstrained, conditions);
        }

        // Rule 2: all three resources present at once.
        if classification.scale == ScaleCategory::Large
            && classification.budget == BudgetCategory::High
            && classification.power == PowerCategory::High
        {
            let conditions = vec![COND_LARGE_SCALE, COND_HIGH_BUDGET, COND_HIGH_POWER];
            return Self::decide(FiredRule::ResourceRich, conditions);
        }

        // Rule 3: balanced default.
        Self::decide(FiredRule::BalancedDefault, vec![COND_MIXED])
    }

    /// Returns just the selected topology.
    pub fn suggest(classification: &Classification) -> Topology {
        Self::evaluate(classification).topology
    }

    /// Evaluates the rules and returns the explanation of the outcome.
    pub fn explain(classification: &Classification) -> RuleExplanation {
        Self::evaluate(classification).into_explanation()
    }

    fn decide(fired_rule: FiredRule, triggering_conditions: Vec<&'static str>) -> RuleDecision {
        let topology = fired_rule.topology();
        debug!(
            rule = fired_rule.number(),
            topology = topology.as_str(),
            "rule fired"
        );
        RuleDecision {
            topology,
            fired_rule,
            triggering_conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(
        scale: ScaleCategory,
        budget: BudgetCategory,
        power: PowerCategory,
    ) -> Classification {
        Classification {
            scale,
            budget,
            power,
        }
    }

    const SCALES: [ScaleCategory; 3] = [
        ScaleCategory::Small,
        ScaleCategory::Medium,
        ScaleCategory::Large,
    ];
    const BUDGETS: [BudgetCategory; 3] = [
        BudgetCategory::Low,
        BudgetCategory::Medium,
        BudgetCategory::High,
    ];
    const POWERS: [PowerCategory; 3] = [
        PowerCategory::Low,
        PowerCategory::Medium,
        PowerCategory::High,
    ];

    // ---- Rule selection ----

    #[test]
    fn test_rule1_fires_on_any_constrained_dimension() {
        let cases = [
            classification(ScaleCategory::Small, BudgetCategory::High, PowerCategory::High),
            classification(ScaleCategory::Large, BudgetCategory::Low, PowerCategory::High),
            classification(ScaleCategory::Large, BudgetCategory::High, PowerCategory::Low),
        ];
        for c in cases {
            let decision = RuleEngine::evaluate(&c);
            assert_eq!(decision.topology, Topology::ThreeTier);
            assert_eq!(decision.fired_rule, FiredRule::CostConstrained);
        }
    }

    #[test]
    fn test_rule2_requires_all_three() {
        let all_three = classification(
            ScaleCategory::Large,
            BudgetCategory::High,
            PowerCategory::High,
        );
        let decision = RuleEngine::evaluate(&all_three);
        assert_eq!(decision.topology, Topology::FatTree);
        assert_eq!(decision.fired_rule, FiredRule::ResourceRich);

        // Weakening any one dimension to Medium drops through to rule 3.
        let weakened = [
            classification(ScaleCategory::Medium, BudgetCategory::High, PowerCategory::High),
            classification(ScaleCategory::Large, BudgetCategory::Medium, PowerCategory::High),
            classification(ScaleCategory::Large, BudgetCategory::High, PowerCategory::Medium),
        ];
        for c in weakened {
            let decision = RuleEngine::evaluate(&c);
            assert_eq!(decision.topology, Topology::LeafSpine);
            assert_eq!(decision.fired_rule, FiredRule::BalancedDefault);
        }
    }

    #[test]
    fn test_rule3_catches_the_middle() {
        let c = classification(
            ScaleCategory::Medium,
            BudgetCategory::Medium,
            PowerCategory::Medium,
        );
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(decision.topology, Topology::LeafSpine);
        assert_eq!(decision.fired_rule, FiredRule::BalancedDefault);
    }

    #[test]
    fn test_first_match_wins_over_rule2() {
        // Large + High budget + Low power satisfies part of rule 2 but
        // rule 1 sees the low power first.
        let c = classification(ScaleCategory::Large, BudgetCategory::High, PowerCategory::Low);
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(decision.fired_rule, FiredRule::CostConstrained);
        assert_eq!(decision.topology, Topology::ThreeTier);
    }

    #[test]
    fn test_all_combinations_follow_first_match_semantics() {
        for scale in SCALES {
            for budget in BUDGETS {
                for power in POWERS {
                    let c = classification(scale, budget, power);
                    let decision = RuleEngine::evaluate(&c);

                    let constrained = scale == ScaleCategory::Small
                        || budget == BudgetCategory::Low
                        || power == PowerCategory::Low;
                    let maximal = scale == ScaleCategory::Large
                        && budget == BudgetCategory::High
                        && power == PowerCategory::High;

                    let expected = if constrained {
                        Topology::ThreeTier
                    } else if maximal {
                        Topology::FatTree
                    } else {
                        Topology::LeafSpine
                    };
                    assert_eq!(decision.topology, expected, "classification {c:?}");
                    assert_eq!(decision.topology, decision.fired_rule.topology());
                }
            }
        }
    }

    // ---- Triggering conditions ----

    #[test]
    fn test_rule1_lists_only_the_constrained_dimensions() {
        let c = classification(ScaleCategory::Small, BudgetCategory::High, PowerCategory::Low);
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(
            decision.triggering_conditions,
            vec!["Small scale", "Low power"]
        );
    }

    #[test]
    fn test_rule1_lists_all_three_when_all_constrained() {
        let c = classification(ScaleCategory::Small, BudgetCategory::Low, PowerCategory::Low);
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(
            decision.triggering_conditions,
            vec!["Small scale", "Low budget", "Low power"]
        );
    }

    #[test]
    fn test_rule2_always_lists_all_three() {
        let c = classification(
            ScaleCategory::Large,
            BudgetCategory::High,
            PowerCategory::High,
        );
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(
            decision.triggering_conditions,
            vec!["Large scale", "High budget", "High power"]
        );
    }

    #[test]
    fn test_rule3_uses_the_mixed_conditions_string() {
        let c = classification(
            ScaleCategory::Medium,
            BudgetCategory::High,
            PowerCategory::Medium,
        );
        let decision = RuleEngine::evaluate(&c);
        assert_eq!(
            decision.triggering_conditions,
            vec!["Medium scale/budget/power or mixed conditions"]
        );
    }

    // ---- Projections ----

    #[test]
    fn test_suggest_matches_evaluate() {
        for scale in SCALES {
            for budget in BUDGETS {
                for power in POWERS {
                    let c = classification(scale, budget, power);
                    assert_eq!(RuleEngine::suggest(&c), RuleEngine::evaluate(&c).topology);
                }
            }
        }
    }

    #[test]
    fn test_explain_matches_evaluate() {
        let c = classification(ScaleCategory::Large, BudgetCategory::Low, PowerCategory::High);
        let decision = RuleEngine::evaluate(&c);
        let explanation = RuleEngine::explain(&c);
        assert_eq!(explanation.fired_rule, decision.fired_rule);
        assert_eq!(
            explanation.triggering_conditions,
            decision.triggering_conditions
        );
    }

    #[test]
    fn test_explanation_rejects_the_other_two() {
        let c = classification(
            ScaleCategory::Medium,
            BudgetCategory::Medium,
            PowerCategory::Medium,
        );
        let explanation = RuleEngine::explain(&c);
        assert_eq!(explanation.fired_rule, FiredRule::BalancedDefault);
        let rejected: Vec<Topology> = explanation
            .rejection_reasons
            .iter()
            .map(|(t, _)| *t)
            .collect();
        assert_eq!(rejected, vec![Topology::ThreeTier, Topology::FatTree]);
    }
}
