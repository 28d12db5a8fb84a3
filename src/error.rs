//! Error taxonomy for the planner.
//!
//! Two failure classes exist: per-request input validation (raised when
//! constructing [`PlannerInputs`](crate::inputs::PlannerInputs)) and
//! startup-time configuration validation (raised when constructing the
//! engines). A request either fully succeeds or fully fails; no partial
//! recommendation is ever produced.

use thiserror::Error;

/// All errors the planner can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Rack count was zero.
    #[error("number of racks must be positive")]
    InvalidRacks,

    /// Server count was zero.
    #[error("number of servers must be positive")]
    InvalidServers,

    /// Budget was negative or not a finite number.
    #[error("budget must be a non-negative finite amount")]
    InvalidBudget,

    /// Power limit was zero, negative, or not a finite number.
    #[error("power limit must be a positive finite amount")]
    InvalidPower,

    /// Workload string did not name a known workload kind.
    #[error("unknown workload type: {0}")]
    UnknownWorkload(String),

    /// A single scoring weight is outside [0, 1] or not finite. A
    /// configuration defect, not a request error.
    #[error("scoring weight {name} must be within [0, 1], got {value}")]
    WeightRange {
        /// The criterion whose weight is out of range.
        name: &'static str,
        /// The offending weight value.
        value: f64,
    },

    /// Scoring weights do not sum to 1.0 within tolerance. A
    /// configuration defect, not a request error.
    #[error("scoring weights must sum to 1.0, got {sum}")]
    WeightSum {
        /// The actual sum of the configured weights.
        sum: f64,
    },

    /// Classification thresholds are incoherent (e.g. a low band above
    /// its high band). A configuration defect, not a request error.
    #[error("inconsistent classification thresholds: {0}")]
    ThresholdOrder(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PlanError::InvalidRacks.to_string(),
            "number of racks must be positive"
        );
        assert_eq!(
            PlanError::UnknownWorkload("Batch".into()).to_string(),
            "unknown workload type: Batch"
        );
        assert_eq!(
            PlanError::WeightSum { sum: 1.2 }.to_string(),
            "scoring weights must sum to 1.0, got 1.2"
        );
    }
}
