//! Natural-language recommendation text.
//!
//! One fixed prose template per topology, interpolating the
//! classification's display names. The wording is part of the engine's
//! contract: callers surface it verbatim to end users.

use crate::classify::Classification;
use crate::topology::Topology;

/// Appended when the recommendation came from the weighted ranking
/// rather than the rule tree.
const SCORING_SUFFIX: &str = " This recommendation is based on weighted scoring analysis.";

/// Renders the justification paragraph for a recommended topology.
///
/// `rule_based` states where the recommendation came from; when it is
/// `false` a sentence crediting the weighted scoring analysis is
/// appended.
///
/// # Examples
///
/// ```
/// use topoplan::classify::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
/// use topoplan::explain::recommendation_text;
/// use topoplan::topology::Topology;
///
/// let classification = Classification {
///     scale: ScaleCategory::Medium,
///     budget: BudgetCategory::Medium,
///     power: PowerCategory::Medium,
/// };
/// let text = recommendation_text(Topology::LeafSpine, &classification, true);
/// assert!(text.starts_with("Leaf-Spine topology is recommended"));
/// assert!(text.contains("your Medium scale deployment"));
/// ```
pub fn recommendation_text(
    topology: Topology,
    classification: &Classification,
    rule_based: bool,
) -> String {
    let mut text = match topology {
        Topology::ThreeTier => format!(
            "Three-Tier topology is recommended because your deployment is \
             classified as {} scale with {} budget and {} power. This topology \
             is cost-effective for smaller deployments and provides adequate \
             performance for traditional workloads.",
            classification.scale, classification.budget, classification.power
        ),
        Topology::LeafSpine => format!(
            "Leaf-Spine topology is recommended as it balances performance, \
             scalability, and cost for your {} scale deployment with {} budget. \
             This modern architecture offers excellent east-west traffic \
             performance and is the industry standard for medium to large data \
             centers.",
            classification.scale, classification.budget
        ),
        Topology::FatTree => format!(
            "Fat-Tree topology is recommended for your {} scale deployment \
             with {} budget and {} power. This topology provides maximum \
             scalability and performance, making it ideal for high-performance \
             computing and large-scale AI/ML workloads.",
            classification.scale, classification.budget, classification.power
        ),
    };

    if !rule_based {
        text.push_str(SCORING_SUFFIX);
    }
    text
}
