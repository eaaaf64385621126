use crate::entities::BPInstance;
use crate::io::ext_repr::{ExtBPBounds, ExtBPInstance, ExtBPSolution};

/// Exports an instance out of the library
pub fn export_instance(instance: &BPInstance) -> ExtBPInstance {
    ExtBPInstance {
        item_count: instance.item_count(),
        bin_capacity: instance.bin_capacity(),
        weights: instance.weights().to_vec(),
    }
}

pub fn export_bounds(instance: &BPInstance) -> ExtBPBounds {
    ExtBPBounds {
        total_weight: instance.total_weight(),
        min_bins: instance.min_bins(),
        max_bins: instance.max_bins(),
    }
}

/// Scores an assignment and exports it together with its diagnostics
pub fn export_solution(instance: &BPInstance, assignment: &[usize]) -> ExtBPSolution {
    let evaluation = instance.assess(assignment);
    ExtBPSolution {
        assignment: assignment.to_vec(),
        score: evaluation.score(),
        feasible: evaluation.is_feasible(),
        bins_used: evaluation.bins_used(),
        bin_loads: instance.bin_loads(assignment),
        violation: evaluation.violation().map(|v| v.to_string()),
    }
}
