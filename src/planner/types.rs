//! Recommendation bundle.

use crate::classify::Classification;
use crate::scoring::TopologyScore;
use crate::topology::Topology;

/// Confidence reported when the rule engine and the weighted ranking
/// agree on the topology.
pub const CONFIDENCE_ALIGNED: f64 = 0.8;

/// Confidence reported when the weighted ranking's top topology differs
/// from the rule engine's choice.
pub const CONFIDENCE_DIVERGENT: f64 = 0.7;

/// The planner's complete answer for one set of inputs.
///
/// `topology` always comes from the rule engine; the ranking is the
/// scorer's independent second opinion and only influences
/// `confidence`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation {
    /// The recommended topology.
    pub topology: Topology,

    /// [`CONFIDENCE_ALIGNED`] when the top-ranked topology matches the
    /// recommendation, [`CONFIDENCE_DIVERGENT`] otherwise.
    pub confidence: f64,

    /// Natural-language justification for the recommendation.
    pub explanation: String,

    /// All topologies scored and sorted by descending total.
    pub ranking: Vec<TopologyScore>,

    /// The classification the decision was based on.
    pub classification: Classification,
}
