//! Deterministic decision engine for data-center network topology selection.
//!
//! Maps five deployment parameters (rack count, server count, budget,
//! power limit, workload kind) to one of three topology labels, with a
//! natural-language justification. Two independent methods run on every
//! request:
//!
//! - **Rule selection**: Three ordered rules over threshold-classified
//!   inputs pick the recommended topology. First match wins and the
//!   rules cover every case.
//! - **Weighted scoring**: A multi-criteria score over five fixed fit
//!   matrices ranks all three topologies. The ranking never overrides
//!   the rules; agreement between the two methods sets the confidence.
//!
//! # Modules
//!
//! - [`inputs`]: Validated deployment parameters and workload kinds
//! - [`classify`]: Threshold categorization of scale, budget, and power
//! - [`rules`]: The ordered rule tree and its explanation
//! - [`scoring`]: Weighted linear combination over fixed fit matrices
//! - [`explain`]: Recommendation prose templates
//! - [`planner`]: Orchestration of the full pipeline
//! - [`topology`]: The closed label set with static profiles
//!
//! # Architecture
//!
//! The pipeline is a pure function: identical inputs and configuration
//! always produce the identical recommendation. All configuration
//! (eight classification thresholds, five scoring weights) is validated
//! once at construction; after that, recommending cannot fail. There is
//! no stored state, no randomness, and no I/O.

pub mod classify;
pub mod error;
pub mod explain;
pub mod inputs;
pub mod planner;
pub mod rules;
pub mod scoring;
pub mod topology;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::PlanError;
