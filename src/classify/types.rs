//! Ordinal categories produced by the threshold classifier.

use std::fmt;

/// Deployment scale category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleCategory {
    Small,
    Medium,
    Large,
}

impl ScaleCategory {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleCategory::Small => "Small",
            ScaleCategory::Medium => "Medium",
            ScaleCategory::Large => "Large",
        }
    }
}

impl fmt::Display for ScaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget level category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BudgetCategory {
    Low,
    Medium,
    High,
}

impl BudgetCategory {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Low => "Low",
            BudgetCategory::Medium => "Medium",
            BudgetCategory::High => "High",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power level category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerCategory {
    Low,
    Medium,
    High,
}

impl PowerCategory {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerCategory::Low => "Low",
            PowerCategory::Medium => "Medium",
            PowerCategory::High => "High",
        }
    }
}

impl fmt::Display for PowerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full classification of one set of planner inputs.
///
/// Derived deterministically from [`PlannerInputs`](crate::inputs::PlannerInputs)
/// by the [`Classifier`](super::Classifier); both the rule engine and the
/// scoring engine consume the same classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Scale category from rack and server counts.
    pub scale: ScaleCategory,
    /// Budget category from the USD budget.
    pub budget: BudgetCategory,
    /// Power category from the kW power limit.
    pub power: PowerCategory,
}
