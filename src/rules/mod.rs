//! Rule-based topology selection.
//!
//! A fixed decision tree of three ordered rules over a
//! [`Classification`](crate::classify::Classification): constrained
//! deployments get Three-Tier, fully resourced large deployments get
//! Fat-Tree, and everything in between gets Leaf-Spine. First match
//! wins, and the three rules together cover every classification.
//!
//! # Key Types
//!
//! - [`RuleEngine`]: Evaluates the rule tree
//! - [`RuleDecision`]: Selected topology plus firing metadata
//! - [`RuleExplanation`]: Firing metadata plus rejection reasons
//!
//! # Design
//!
//! The rule conditions are tested in exactly one place,
//! [`RuleEngine::evaluate`]. The bare topology and the explanation are
//! both projections of that one evaluation, so the selection and its
//! stated reasons cannot drift apart.

mod engine;
mod types;

pub use engine::RuleEngine;
pub use types::{FiredRule, RuleDecision, RuleExplanation};
