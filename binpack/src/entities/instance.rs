use std::str::FromStr;

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

use crate::entities::evaluation::{Evaluation, PENALTY, Violation};
use crate::entities::problem::Problem;
use crate::io::parser;
use crate::util::assertions;
use crate::{BPError, Result};

/// Bin index per item, indexed by item id.
pub type Assignment = Vec<usize>;

/// Instance of the one-dimensional Bin Packing Problem: a set of weighted items to be assigned to
/// bins of uniform capacity, using as few bins as possible.
///
/// Immutable after construction, the derived bin bounds can therefore never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BPInstance {
    item_count: usize,
    bin_capacity: u64,
    weights: Vec<u64>,
    total_weight: u64,
    min_bins: usize,
    max_bins: usize,
}

impl BPInstance {
    /// Creates an instance from explicit parameters.
    /// `weights[i]` is the weight of item `i`, its length must equal `item_count`.
    pub fn new(item_count: usize, bin_capacity: u64, weights: Vec<u64>) -> Result<Self> {
        if item_count == 0 {
            return Err(BPError::InvalidArgument(
                "item_count must be positive".into(),
            ));
        }
        if item_count as f64 >= PENALTY {
            return Err(BPError::InvalidArgument(format!(
                "item_count {item_count} must stay below the penalty score {PENALTY}"
            )));
        }
        if bin_capacity == 0 {
            return Err(BPError::InvalidArgument(
                "bin_capacity must be positive".into(),
            ));
        }
        if weights.len() != item_count {
            return Err(BPError::InvalidArgument(format!(
                "expected {item_count} weights, got {}",
                weights.len()
            )));
        }
        let total_weight = weights
            .iter()
            .try_fold(0u64, |acc, w| acc.checked_add(*w))
            .ok_or_else(|| BPError::InvalidArgument("total weight overflows u64".into()))?;

        let min_bins = usize::try_from(total_weight.div_ceil(bin_capacity)).map_err(|_| {
            BPError::InvalidArgument("lower bound on the number of bins overflows usize".into())
        })?;
        let max_bins = usize::min(item_count, min_bins.saturating_mul(2));

        let instance = Self {
            item_count,
            bin_capacity,
            weights,
            total_weight,
            min_bins,
            max_bins,
        };

        debug_assert!(assertions::instance_bounds_consistent(&instance));

        debug!(
            "[BP] instance with {} items, capacity {}, total weight {}, bins in [{}, {}]",
            instance.item_count,
            instance.bin_capacity,
            instance.total_weight,
            instance.min_bins,
            instance.max_bins
        );
        if instance.max_bins == 0 {
            warn!("[BP] all items are weightless, no assignment can be scored as feasible");
        }

        Ok(instance)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn bin_capacity(&self) -> u64 {
        self.bin_capacity
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn weight(&self, item_id: usize) -> u64 {
        self.weights[item_id]
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Lower bound on the number of bins: `ceil(total_weight / bin_capacity)`.
    pub fn min_bins(&self) -> usize {
        self.min_bins
    }

    /// Size of the bin index space: `min(item_count, 2 * min_bins)`.
    ///
    /// This restricts the search space heuristically. It is bounded by `item_count`, so a
    /// one-item-per-bin packing always fits, but the `2 * min_bins` factor is not a proven
    /// sufficient bound for every weight distribution.
    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    /// Checks an assignment and reports the first violation, if any.
    /// Checks are performed in order: length, bin index range, bin capacity.
    pub fn assess(&self, assignment: &[usize]) -> Evaluation {
        if assignment.len() != self.item_count {
            return Evaluation::Infeasible(Violation::WrongLength {
                expected: self.item_count,
                actual: assignment.len(),
            });
        }

        if let Some((item_id, &bin)) = assignment
            .iter()
            .find_position(|&&bin| bin >= self.max_bins)
        {
            return Evaluation::Infeasible(Violation::BinOutOfRange {
                item_id,
                bin,
                max_bins: self.max_bins,
            });
        }

        let mut loads = vec![0u64; self.max_bins];
        let mut occupied = vec![false; self.max_bins];
        for (item_id, &bin) in assignment.iter().enumerate() {
            //cannot overflow, total weight was checked at construction
            loads[bin] += self.weights[item_id];
            occupied[bin] = true;
        }

        if let Some((bin, &load)) = loads.iter().find_position(|&&l| l > self.bin_capacity) {
            return Evaluation::Infeasible(Violation::CapacityExceeded {
                bin,
                load,
                capacity: self.bin_capacity,
            });
        }

        Evaluation::Feasible {
            bins_used: occupied.iter().filter(|&&o| o).count(),
        }
    }

    /// Scores an assignment: the number of non-empty bins if it is feasible, [`PENALTY`] otherwise.
    /// Never fails, so it can be called unconditionally from within a search loop.
    pub fn evaluate(&self, assignment: &[usize]) -> f64 {
        self.assess(assignment).score()
    }

    /// Draws `item_count` bin indices independently and uniformly from `[0, max_bins)`.
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Assignment {
        match self.max_bins {
            // empty index space, fall back to an (infeasible) all-zero assignment
            0 => vec![0; self.item_count],
            max_bins => (0..self.item_count)
                .map(|_| rng.random_range(0..max_bins))
                .collect(),
        }
    }

    /// Summed weight per bin, indexed by bin index.
    /// Returns `None` when the assignment has the wrong length or uses an out-of-range bin.
    pub fn bin_loads(&self, assignment: &[usize]) -> Option<Vec<u64>> {
        if assignment.len() != self.item_count || assignment.iter().any(|&b| b >= self.max_bins) {
            return None;
        }
        let mut loads = vec![0u64; self.max_bins];
        for (item_id, &bin) in assignment.iter().enumerate() {
            loads[bin] += self.weights[item_id];
        }
        debug_assert!(assertions::loads_match_total_weight(self, &loads));
        Some(loads)
    }
}

impl Problem for BPInstance {
    type Solution = Assignment;

    fn evaluate(&self, solution: &Assignment) -> f64 {
        self.assess(solution).score()
    }

    fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Assignment {
        BPInstance::random_solution(self, rng)
    }
}

impl FromStr for BPInstance {
    type Err = BPError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_instance(s)
    }
}
