//! Fixed fit-score matrices.
//!
//! Each function is an exhaustive match over a closed enum pair, so a
//! lookup that could miss does not compile. All values are in [0, 1];
//! they are part of the scoring contract and never computed.

use crate::classify::{BudgetCategory, PowerCategory, ScaleCategory};
use crate::inputs::WorkloadKind;
use crate::topology::Topology;

/// How well each topology suits a scale category.
pub(super) fn scale_fit(topology: Topology, scale: ScaleCategory) -> f64 {
    match (topology, scale) {
        (Topology::ThreeTier, ScaleCategory::Small) => 1.0,
        (Topology::ThreeTier, ScaleCategory::Medium) => 0.6,
        (Topology::ThreeTier, ScaleCategory::Large) => 0.2,
        (Topology::LeafSpine, ScaleCategory::Small) => 0.5,
        (Topology::LeafSpine, ScaleCategory::Medium) => 0.9,
        (Topology::LeafSpine, ScaleCategory::Large) => 0.95,
        (Topology::FatTree, ScaleCategory::Small) => 0.1,
        (Topology::FatTree, ScaleCategory::Medium) => 0.4,
        (Topology::FatTree, ScaleCategory::Large) => 1.0,
    }
}

/// How well each topology suits a budget category.
pub(super) fn budget_fit(topology: Topology, budget: BudgetCategory) -> f64 {
    match (topology, budget) {
        (Topology::ThreeTier, BudgetCategory::Low) => 1.0,
        (Topology::ThreeTier, BudgetCategory::Medium) => 0.7,
        (Topology::ThreeTier, BudgetCategory::High) => 0.3,
        (Topology::LeafSpine, BudgetCategory::Low) => 0.4,
        (Topology::LeafSpine, BudgetCategory::Medium) => 0.9,
        (Topology::LeafSpine, BudgetCategory::High) => 0.8,
        (Topology::FatTree, BudgetCategory::Low) => 0.1,
        (Topology::FatTree, BudgetCategory::Medium) => 0.3,
        (Topology::FatTree, BudgetCategory::High) => 1.0,
    }
}

/// How well each topology suits a power category.
pub(super) fn power_fit(topology: Topology, power: PowerCategory) -> f64 {
    match (topology, power) {
        (Topology::ThreeTier, PowerCategory::Low) => 1.0,
        (Topology::ThreeTier, PowerCategory::Medium) => 0.6,
        (Topology::ThreeTier, PowerCategory::High) => 0.3,
        (Topology::LeafSpine, PowerCategory::Low) => 0.5,
        (Topology::LeafSpine, PowerCategory::Medium) => 0.9,
        (Topology::LeafSpine, PowerCategory::High) => 0.8,
        (Topology::FatTree, PowerCategory::Low) => 0.2,
        (Topology::FatTree, PowerCategory::Medium) => 0.4,
        (Topology::FatTree, PowerCategory::High) => 1.0,
    }
}

/// How well each topology suits a workload kind.
pub(super) fn workload_fit(topology: Topology, workload: WorkloadKind) -> f64 {
    match (topology, workload) {
        (Topology::ThreeTier, WorkloadKind::AiTraining) => 0.3,
        (Topology::ThreeTier, WorkloadKind::WebServices) => 0.7,
        (Topology::ThreeTier, WorkloadKind::Storage) => 0.8,
        (Topology::ThreeTier, WorkloadKind::Mixed) => 0.5,
        (Topology::LeafSpine, WorkloadKind::AiTraining) => 0.8,
        (Topology::LeafSpine, WorkloadKind::WebServices) => 0.9,
        (Topology::LeafSpine, WorkloadKind::Storage) => 0.7,
        (Topology::LeafSpine, WorkloadKind::Mixed) => 0.95,
        (Topology::FatTree, WorkloadKind::AiTraining) => 1.0,
        (Topology::FatTree, WorkloadKind::WebServices) => 0.6,
        (Topology::FatTree, WorkloadKind::Storage) => 0.5,
        (Topology::FatTree, WorkloadKind::Mixed) => 0.7,
    }
}

/// How well each topology's growth headroom suits a scale category.
///
/// Distinct from [`scale_fit`]: that matrix scores the present size,
/// this one scores room to grow from it.
pub(super) fn scalability_fit(topology: Topology, scale: ScaleCategory) -> f64 {
    match (topology, scale) {
        (Topology::ThreeTier, ScaleCategory::Small) => 0.9,
        (Topology::ThreeTier, ScaleCategory::Medium) => 0.5,
        (Topology::ThreeTier, ScaleCategory::Large) => 0.2,
        (Topology::LeafSpine, ScaleCategory::Small) => 0.4,
        (Topology::LeafSpine, ScaleCategory::Medium) => 0.9,
        (Topology::LeafSpine, ScaleCategory::Large) => 0.95,
        (Topology::FatTree, ScaleCategory::Small) => 0.2,
        (Topology::FatTree, ScaleCategory::Medium) => 0.5,
        (Topology::FatTree, ScaleCategory::Large) => 1.0,
    }
}
