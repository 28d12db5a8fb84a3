//! The topology catalog.
//!
//! [`Topology`] is the closed set of network architectures the planner
//! selects among. Each label carries a static [`TopologyProfile`] with the
//! descriptive data presentation layers display next to a recommendation
//! (use cases, trade-offs, coarse ratings). The profiles are reference data
//! only; no decision logic reads them.

use std::fmt;

/// A data-center network topology the planner can recommend.
///
/// The declaration order (`ThreeTier`, `LeafSpine`, `FatTree`) is
/// significant: it is the stable tie-break order used by the scoring
/// engine's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Traditional core/aggregation/access hierarchy.
    ThreeTier,
    /// Two-tier leaf-spine fabric, the modern default.
    LeafSpine,
    /// Multi-level fat-tree with full bisection bandwidth.
    FatTree,
}

impl Topology {
    /// All topologies, in the stable tie-break order.
    pub const ALL: [Topology; 3] = [Topology::ThreeTier, Topology::LeafSpine, Topology::FatTree];

    /// Human-readable name, as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::ThreeTier => "Three-Tier",
            Topology::LeafSpine => "Leaf-Spine",
            Topology::FatTree => "Fat-Tree",
        }
    }

    /// Static descriptive profile for this topology.
    pub fn profile(&self) -> &'static TopologyProfile {
        match self {
            Topology::ThreeTier => &THREE_TIER_PROFILE,
            Topology::LeafSpine => &LEAF_SPINE_PROFILE,
            Topology::FatTree => &FAT_TREE_PROFILE,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse three-to-four step rating used in topology profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Rating {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
            Rating::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive characteristics of one topology.
///
/// Static reference data for display purposes (comparison tables, detail
/// panels). The decision engine itself never consults profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopologyProfile {
    /// Display name, identical to [`Topology::as_str`].
    pub name: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Deployments this topology typically serves.
    pub typical_use_cases: &'static [&'static str],
    /// Strengths.
    pub advantages: &'static [&'static str],
    /// Weaknesses.
    pub disadvantages: &'static [&'static str],
    /// Coarse cost rating.
    pub cost_estimate: Rating,
    /// Coarse scalability rating.
    pub scalability: Rating,
    /// Coarse operational complexity rating.
    pub complexity: Rating,
}

static THREE_TIER_PROFILE: TopologyProfile = TopologyProfile {
    name: "Three-Tier",
    description: "Traditional hierarchical architecture with core, aggregation, and \
                  access layers. Suitable for small to medium deployments.",
    typical_use_cases: &[
        "Small data centers (< 20 racks)",
        "Legacy infrastructure",
        "Cost-sensitive deployments",
    ],
    advantages: &[
        "Simple to design and manage",
        "Lower initial cost",
        "Clear separation of layers",
        "Good for predictable traffic patterns",
    ],
    disadvantages: &[
        "Limited scalability",
        "Potential bottlenecks at aggregation layer",
        "Higher latency for east-west traffic",
        "Less efficient for modern cloud workloads",
    ],
    cost_estimate: Rating::Low,
    scalability: Rating::Low,
    complexity: Rating::Low,
};

static LEAF_SPINE_PROFILE: TopologyProfile = TopologyProfile {
    name: "Leaf-Spine",
    description: "Modern two-tier architecture with leaf switches connecting servers \
                  and spine switches providing inter-leaf connectivity. Offers \
                  excellent scalability and performance.",
    typical_use_cases: &[
        "Medium to large data centers (20-100 racks)",
        "Cloud computing environments",
        "Virtualized workloads",
        "High east-west traffic",
    ],
    advantages: &[
        "Excellent scalability",
        "Low latency (equal hop count)",
        "High bisection bandwidth",
        "Good for dynamic workloads",
        "Industry standard for modern DCs",
    ],
    disadvantages: &[
        "Higher cost than three-tier",
        "Requires more switches",
        "More complex to manage at scale",
    ],
    cost_estimate: Rating::Medium,
    scalability: Rating::High,
    complexity: Rating::Medium,
};

static FAT_TREE_PROFILE: TopologyProfile = TopologyProfile {
    name: "Fat-Tree",
    description: "Multi-level hierarchical topology with increasing bandwidth toward \
                  the core. Designed for maximum performance and scalability in \
                  large-scale deployments.",
    typical_use_cases: &[
        "Large data centers (> 100 racks)",
        "High-performance computing (HPC)",
        "AI/ML training clusters",
        "Scientific computing",
    ],
    advantages: &[
        "Maximum scalability",
        "Optimal bisection bandwidth",
        "No oversubscription at core",
        "Excellent for high-bandwidth workloads",
        "Supports massive scale",
    ],
    disadvantages: &[
        "Highest cost",
        "Complex design and management",
        "Requires significant power and cooling",
        "Overkill for smaller deployments",
    ],
    cost_estimate: Rating::High,
    scalability: Rating::VeryHigh,
    complexity: Rating::High,
};
