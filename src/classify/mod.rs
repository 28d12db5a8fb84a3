//! Threshold classification of deployment parameters.
//!
//! Maps raw deployment numbers onto discrete categories along three
//! independent axes: scale (rack and server counts), budget, and power
//! capacity. Downstream stages consume only the categories, never the
//! raw numbers, so every threshold comparison in the system lives here.
//!
//! # Key Types
//!
//! - [`ClassifyConfig`]: Threshold bands for all three axes
//! - [`Classifier`]: Applies the thresholds to concrete inputs
//! - [`Classification`]: The resulting category triple
//!
//! # Boundary Policy
//!
//! Categories are half-open: a value strictly below the lower bound is
//! low, a value at or above the upper bound is high, everything else is
//! the middle band. Boundary values therefore always land in the band
//! whose lower edge they touch.

mod config;
mod engine;
mod types;

pub use config::{BandThresholds, ClassifyConfig, ScaleThresholds};
pub use engine::Classifier;
pub use types::{BudgetCategory, Classification, PowerCategory, ScaleCategory};
