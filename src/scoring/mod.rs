//! Weighted multi-criteria topology scoring.
//!
//! Every topology is scored against five criteria (scale, budget,
//! power, workload, scalability) using fixed fit matrices, then the
//! criteria are combined by weighted linear combination. The weights
//! default to 30/25/20/15/10 percent and are configurable as long as
//! they stay a convex combination.
//!
//! Scoring is independent of the rule engine: it ranks all three
//! topologies rather than picking one, and the orchestration layer
//! compares the two outputs to derive a confidence level.
//!
//! # Key Types
//!
//! - [`ScoringWeights`]: The criterion weights
//! - [`Scorer`]: Computes scores and rankings
//! - [`TopologyScore`]: Total plus per-criterion breakdown

mod config;
mod engine;
mod matrices;
mod types;

pub use config::ScoringWeights;
pub use engine::Scorer;
pub use types::{Criterion, CriterionScore, TopologyScore};
