//! Top-level orchestration.
//!
//! Runs the full pipeline for one set of inputs: classify the raw
//! numbers, let the rule tree pick a topology, rank all topologies by
//! weighted score, and assemble the answer. The rule engine's pick is
//! always the recommendation; agreement with the ranking only sets the
//! confidence level.
//!
//! # Key Types
//!
//! - [`PlannerConfig`]: Thresholds and weights in one bundle
//! - [`Planner`]: Validates once, then recommends infallibly
//! - [`Recommendation`]: Topology, confidence, explanation, ranking
//!
//! # Examples
//!
//! ```
//! use topoplan::inputs::PlannerInputs;
//! use topoplan::planner::Planner;
//!
//! let planner = Planner::default();
//! let inputs = PlannerInputs::from_raw(19, 500, 250_000.0, 80.0, "Mixed")?;
//! let (recommendation, rules) = planner.recommend(&inputs);
//!
//! assert_eq!(recommendation.topology.as_str(), "Three-Tier");
//! assert_eq!(rules.fired_rule.number(), 1);
//! # Ok::<(), topoplan::PlanError>(())
//! ```

mod config;
mod engine;
mod types;

pub use config::PlannerConfig;
pub use engine::Planner;
pub use types::{Recommendation, CONFIDENCE_ALIGNED, CONFIDENCE_DIVERGENT};
