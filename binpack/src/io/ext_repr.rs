use serde::{Deserialize, Serialize};

/// External representation of a [`BPInstance`](crate::entities::BPInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBPInstance {
    /// Number of items
    pub item_count: usize,
    /// Maximum total weight per bin
    pub bin_capacity: u64,
    /// Weight of every item, indexed by item id
    pub weights: Vec<u64>,
}

/// Derived bin bounds of an instance, exported for reporting purposes only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtBPBounds {
    pub total_weight: u64,
    pub min_bins: usize,
    pub max_bins: usize,
}

/// External representation of a scored assignment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBPSolution {
    /// Bin index per item, indexed by item id
    pub assignment: Vec<usize>,
    /// Score as seen by a search process (lower is better)
    pub score: f64,
    pub feasible: bool,
    /// Number of non-empty bins, only present for feasible assignments
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bins_used: Option<usize>,
    /// Summed weight per bin index, absent if the assignment is structurally invalid
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bin_loads: Option<Vec<u64>>,
    /// Human-readable description of the first violation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub violation: Option<String>,
}
