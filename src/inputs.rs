//! Validated planner inputs.
//!
//! [`PlannerInputs`] is the only entry point for raw user data. Construction
//! enforces the engine's integrity invariants (positive counts, non-negative
//! finite budget, positive finite power, known workload kind), so every
//! downstream component can assume valid data. Fields are private; a value
//! that exists is a value that passed validation.

use crate::error::PlanError;
use std::fmt;
use std::str::FromStr;

/// The workload the data center will host.
///
/// A closed set: the engine's workload-fit lookup table covers exactly
/// these four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkloadKind {
    /// Bandwidth-hungry AI/ML training clusters.
    AiTraining,
    /// Request/response web serving with north-south traffic.
    WebServices,
    /// Bulk storage with predictable traffic patterns.
    Storage,
    /// A mix of the above with no dominant pattern.
    Mixed,
}

impl WorkloadKind {
    /// All workload kinds, in declaration order.
    pub const ALL: [WorkloadKind; 4] = [
        WorkloadKind::AiTraining,
        WorkloadKind::WebServices,
        WorkloadKind::Storage,
        WorkloadKind::Mixed,
    ];

    /// Human-readable name, as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::AiTraining => "AI Training",
            WorkloadKind::WebServices => "Web Services",
            WorkloadKind::Storage => "Storage",
            WorkloadKind::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadKind {
    type Err = PlanError;

    /// Parses the human-readable name ("AI Training", "Web Services",
    /// "Storage", "Mixed"). Anything else is a [`PlanError::UnknownWorkload`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AI Training" => Ok(WorkloadKind::AiTraining),
            "Web Services" => Ok(WorkloadKind::WebServices),
            "Storage" => Ok(WorkloadKind::Storage),
            "Mixed" => Ok(WorkloadKind::Mixed),
            other => Err(PlanError::UnknownWorkload(other.to_string())),
        }
    }
}

/// Validated raw inputs for one planning request.
///
/// # Invariants
///
/// - `racks >= 1` and `servers >= 1`
/// - `budget_usd >= 0` and finite (zero budget is allowed)
/// - `power_kw > 0` and finite
///
/// Constructed values are immutable; there are no setters.
///
/// # Examples
///
/// ```
/// use topoplan::inputs::{PlannerInputs, WorkloadKind};
///
/// let inputs = PlannerInputs::new(40, 800, 250_000.0, 120.0, WorkloadKind::Mixed).unwrap();
/// assert_eq!(inputs.racks(), 40);
/// assert_eq!(inputs.workload(), WorkloadKind::Mixed);
///
/// // Construction fails on invalid data; the engine never sees it.
/// assert!(PlannerInputs::new(0, 800, 250_000.0, 120.0, WorkloadKind::Mixed).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlannerInputs {
    racks: u32,
    servers: u32,
    budget_usd: f64,
    power_kw: f64,
    workload: WorkloadKind,
}

impl PlannerInputs {
    /// Creates validated inputs.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checked in field order:
    /// racks, servers, budget, power.
    pub fn new(
        racks: u32,
        servers: u32,
        budget_usd: f64,
        power_kw: f64,
        workload: WorkloadKind,
    ) -> Result<Self, PlanError> {
        if racks == 0 {
            return Err(PlanError::InvalidRacks);
        }
        if servers == 0 {
            return Err(PlanError::InvalidServers);
        }
        if !budget_usd.is_finite() || budget_usd < 0.0 {
            return Err(PlanError::InvalidBudget);
        }
        if !power_kw.is_finite() || power_kw <= 0.0 {
            return Err(PlanError::InvalidPower);
        }
        Ok(Self {
            racks,
            servers,
            budget_usd,
            power_kw,
            workload,
        })
    }

    /// Creates validated inputs with the workload given as its
    /// human-readable name.
    ///
    /// This is the convenience constructor for presentation layers that
    /// collect the workload as a string.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownWorkload`] if the string names no known kind,
    /// otherwise the same invariant checks as [`PlannerInputs::new`].
    pub fn from_raw(
        racks: u32,
        servers: u32,
        budget_usd: f64,
        power_kw: f64,
        workload: &str,
    ) -> Result<Self, PlanError> {
        let workload = workload.parse::<WorkloadKind>()?;
        Self::new(racks, servers, budget_usd, power_kw, workload)
    }

    /// Number of server racks.
    pub fn racks(&self) -> u32 {
        self.racks
    }

    /// Total number of servers.
    pub fn servers(&self) -> u32 {
        self.servers
    }

    /// Total budget in USD.
    pub fn budget_usd(&self) -> f64 {
        self.budget_usd
    }

    /// Power limit in kilowatts.
    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }

    /// Workload kind to be hosted.
    pub fn workload(&self) -> WorkloadKind {
        self.workload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<PlannerInputs, PlanError> {
        PlannerInputs::new(40, 800, 250_000.0, 120.0, WorkloadKind::WebServices)
    }

    #[test]
    fn test_valid_construction() {
        let inputs = valid().unwrap();
        assert_eq!(inputs.racks(), 40);
        assert_eq!(inputs.servers(), 800);
        assert!((inputs.budget_usd() - 250_000.0).abs() < 1e-10);
        assert!((inputs.power_kw() - 120.0).abs() < 1e-10);
        assert_eq!(inputs.workload(), WorkloadKind::WebServices);
    }

    #[test]
    fn test_zero_budget_is_allowed() {
        let inputs = PlannerInputs::new(1, 1, 0.0, 1.0, WorkloadKind::Storage);
        assert!(inputs.is_ok());
    }

    // ---- Rejections ----

    #[test]
    fn test_zero_racks_rejected() {
        let err = PlannerInputs::new(0, 800, 250_000.0, 120.0, WorkloadKind::Mixed);
        assert_eq!(err.unwrap_err(), PlanError::InvalidRacks);
    }

    #[test]
    fn test_zero_servers_rejected() {
        let err = PlannerInputs::new(40, 0, 250_000.0, 120.0, WorkloadKind::Mixed);
        assert_eq!(err.unwrap_err(), PlanError::InvalidServers);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = PlannerInputs::new(40, 800, -1.0, 120.0, WorkloadKind::Mixed);
        assert_eq!(err.unwrap_err(), PlanError::InvalidBudget);
    }

    #[test]
    fn test_non_finite_budget_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PlannerInputs::new(40, 800, bad, 120.0, WorkloadKind::Mixed);
            assert_eq!(err.unwrap_err(), PlanError::InvalidBudget);
        }
    }

    #[test]
    fn test_zero_power_rejected() {
        let err = PlannerInputs::new(40, 800, 250_000.0, 0.0, WorkloadKind::Mixed);
        assert_eq!(err.unwrap_err(), PlanError::InvalidPower);
    }

    #[test]
    fn test_non_finite_power_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let err = PlannerInputs::new(40, 800, 250_000.0, bad, WorkloadKind::Mixed);
            assert_eq!(err.unwrap_err(), PlanError::InvalidPower);
        }
    }

    // ---- Workload parsing ----

    #[test]
    fn test_workload_from_str_roundtrip() {
        for kind in WorkloadKind::ALL {
            assert_eq!(kind.as_str().parse::<WorkloadKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_workload_rejected() {
        let err = "Unknown".parse::<WorkloadKind>().unwrap_err();
        assert_eq!(err, PlanError::UnknownWorkload("Unknown".to_string()));
    }

    #[test]
    fn test_from_raw() {
        let inputs = PlannerInputs::from_raw(40, 800, 250_000.0, 120.0, "AI Training").unwrap();
        assert_eq!(inputs.workload(), WorkloadKind::AiTraining);

        let err = PlannerInputs::from_raw(40, 800, 250_000.0, 120.0, "Batch");
        assert_eq!(err.unwrap_err(), PlanError::UnknownWorkload("Batch".to_string()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WorkloadKind::AiTraining.to_string(), "AI Training");
        assert_eq!(WorkloadKind::WebServices.to_string(), "Web Services");
        assert_eq!(WorkloadKind::Storage.to_string(), "Storage");
        assert_eq!(WorkloadKind::Mixed.to_string(), "Mixed");
    }
}
