//! The top-level planner.

use tracing::debug;

use super::config::PlannerConfig;
use super::types::{Recommendation, CONFIDENCE_ALIGNED, CONFIDENCE_DIVERGENT};
use crate::classify::{Classifier, ClassifyConfig};
use crate::error::PlanError;
use crate::explain::recommendation_text;
use crate::inputs::PlannerInputs;
use crate::rules::{RuleEngine, RuleExplanation};
use crate::scoring::{Scorer, ScoringWeights};

/// Wires classification, rule selection, and weighted scoring into one
/// recommendation pipeline.
///
/// Construction validates the entire configuration, so a planner that
/// exists can always produce a recommendation: [`recommend`] takes
/// already-validated inputs and cannot fail.
///
/// The recommended topology always comes from the rule engine. The
/// weighted ranking runs alongside it as an independent cross-check and
/// decides only the confidence: [`CONFIDENCE_ALIGNED`] when the
/// top-ranked topology agrees with the rules, [`CONFIDENCE_DIVERGENT`]
/// when it does not.
///
/// [`recommend`]: Self::recommend
///
/// # Examples
///
/// ```
/// use topoplan::inputs::{PlannerInputs, WorkloadKind};
/// use topoplan::planner::Planner;
/// use topoplan::topology::Topology;
///
/// let planner = Planner::default();
/// let inputs = PlannerInputs::new(150, 5000, 600_000.0, 250.0, WorkloadKind::AiTraining)?;
/// let (recommendation, rules) = planner.recommend(&inputs);
///
/// assert_eq!(recommendation.topology, Topology::FatTree);
/// assert_eq!(rules.fired_rule.number(), 2);
/// assert!((recommendation.confidence - 0.8).abs() < 1e-12);
/// # Ok::<(), topoplan::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    classifier: Classifier,
    scorer: Scorer,
}

impl Planner {
    /// Creates a planner, validating the whole configuration up front.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        let classifier = Classifier::new(config.thresholds)?;
        let scorer = Scorer::new(config.weights)?;
        Ok(Self { classifier, scorer })
    }

    /// Returns the classification thresholds in use.
    pub fn thresholds(&self) -> &ClassifyConfig {
        self.classifier.config()
    }

    /// Returns the scoring weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        self.scorer.weights()
    }

    /// Produces the recommendation and the rule explanation for one set
    /// of inputs.
    pub fn recommend(&self, inputs: &PlannerInputs) -> (Recommendation, RuleExplanation) {
        let classification = self.classifier.classify(inputs);
        let decision = RuleEngine::evaluate(&classification);
        let ranking = self.scorer.rank(inputs, &classification);

        // The rule engine's choice always wins; the ranking only
        // decides how confident we are in it.
        let top = ranking.first().map(|s| s.topology);
        let confidence = if top == Some(decision.topology) {
            CONFIDENCE_ALIGNED
        } else {
            CONFIDENCE_DIVERGENT
        };

        let explanation = recommendation_text(decision.topology, &classification, true);
        debug!(
            topology = decision.topology.as_str(),
            confidence,
            rule = decision.fired_rule.number(),
            "recommendation ready"
        );

        let recommendation = Recommendation {
            topology: decision.topology,
            confidence,
            explanation,
            ranking,
            classification,
        };
        (recommendation, decision.into_explanation())
    }
}

impl Default for Planner {
    /// A planner with default thresholds and weights.
    fn default() -> Self {
        Self {
            classifier: Classifier::default(),
            scorer: Scorer::default(),
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::inputs::WorkloadKind;
    use crate::topology::Topology;

    fn workload() -> impl Strategy<Value = WorkloadKind> {
        (0usize..WorkloadKind::ALL.len()).prop_map(|i| WorkloadKind::ALL[i])
    }

    proptest! {
        #[test]
        fn recommend_is_total_and_consistent(
            racks in 1u32..10_000,
            servers in 1u32..100_000,
            budget in 0.0f64..10_000_000.0,
            power in 0.1f64..100_000.0,
            workload in workload(),
        ) {
            let inputs = PlannerInputs::new(racks, servers, budget, power, workload).unwrap();
            let planner = Planner::default();
            let (recommendation, rules) = planner.recommend(&inputs);

            // The recommendation is the rule engine's pick for the same
            // classification.
            let classification = Classifier::default().classify(&inputs);
            prop_assert_eq!(recommendation.classification, classification);
            prop_assert_eq!(recommendation.topology, RuleEngine::suggest(&classification));
            prop_assert_eq!(recommendation.topology, rules.fired_rule.topology());

            // Confidence is one of the two fixed levels.
            prop_assert!(
                recommendation.confidence == CONFIDENCE_ALIGNED
                    || recommendation.confidence == CONFIDENCE_DIVERGENT
            );

            // The ranking covers every topology exactly once, descending,
            // in range.
            prop_assert_eq!(recommendation.ranking.len(), Topology::ALL.len());
            for topology in Topology::ALL {
                prop_assert!(recommendation
                    .ranking
                    .iter()
                    .any(|score| score.topology == topology));
            }
            for pair in recommendation.ranking.windows(2) {
                prop_assert!(pair[0].total >= pair[1].total);
            }
            for score in &recommendation.ranking {
                prop_assert!(score.total >= 0.0 && score.total <= 1.0 + 1e-9);
            }

            // The explanation names the recommended topology.
            prop_assert!(recommendation
                .explanation
                .starts_with(recommendation.topology.as_str()));
        }

        #[test]
        fn recommend_is_deterministic(
            racks in 1u32..500,
            servers in 1u32..5_000,
            budget in 0.0f64..1_000_000.0,
            power in 0.1f64..500.0,
            workload in workload(),
        ) {
            let inputs = PlannerInputs::new(racks, servers, budget, power, workload).unwrap();
            let planner = Planner::default();
            prop_assert_eq!(planner.recommend(&inputs), planner.recommend(&inputs));
        }
    }
}
