use std::fmt::{Display, Formatter};

/// Score assigned to every candidate that violates the problem's contract.
/// Strictly larger than any achievable bin count, so it never ties with a real objective value.
pub const PENALTY: f64 = 1e9;

/// Detailed outcome of checking an assignment against a [`BPInstance`](crate::entities::BPInstance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// All items are assigned to a valid bin and no bin is overloaded
    Feasible { bins_used: usize },
    /// The first violation encountered
    Infeasible(Violation),
}

impl Evaluation {
    /// Collapses the evaluation into a single totally-ordered score (lower is better).
    pub fn score(&self) -> f64 {
        match self {
            Evaluation::Feasible { bins_used } => *bins_used as f64,
            Evaluation::Infeasible(_) => PENALTY,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Evaluation::Feasible { .. })
    }

    pub fn bins_used(&self) -> Option<usize> {
        match self {
            Evaluation::Feasible { bins_used } => Some(*bins_used),
            Evaluation::Infeasible(_) => None,
        }
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            Evaluation::Feasible { .. } => None,
            Evaluation::Infeasible(v) => Some(*v),
        }
    }
}

/// Reasons an assignment can be rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The assignment does not contain exactly one bin per item
    WrongLength { expected: usize, actual: usize },
    /// An item is assigned to a bin outside of `[0, max_bins)`
    BinOutOfRange {
        item_id: usize,
        bin: usize,
        max_bins: usize,
    },
    /// The summed weight of a bin exceeds the capacity
    CapacityExceeded { bin: usize, load: u64, capacity: u64 },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::WrongLength { expected, actual } => {
                write!(f, "expected {expected} bin indices, got {actual}")
            }
            Violation::BinOutOfRange {
                item_id,
                bin,
                max_bins,
            } => write!(
                f,
                "item {item_id} is assigned to bin {bin}, outside of [0, {max_bins})"
            ),
            Violation::CapacityExceeded {
                bin,
                load,
                capacity,
            } => write!(f, "bin {bin} carries {load}, exceeding capacity {capacity}"),
        }
    }
}
