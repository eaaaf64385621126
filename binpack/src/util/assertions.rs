use crate::entities::BPInstance;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_bounds_consistent(instance: &BPInstance) -> bool {
    let weights = instance.weights();
    let total_weight: u64 = weights.iter().sum();
    let min_bins = total_weight.div_ceil(instance.bin_capacity()) as usize;

    weights.len() == instance.item_count()
        && instance.bin_capacity() > 0
        && instance.total_weight() == total_weight
        && instance.min_bins() == min_bins
        && instance.max_bins() == instance.item_count().min(min_bins.saturating_mul(2))
        && (total_weight == 0 || instance.min_bins() >= 1)
}

pub fn loads_match_total_weight(instance: &BPInstance, loads: &[u64]) -> bool {
    loads.len() == instance.max_bins() && loads.iter().sum::<u64>() == instance.total_weight()
}
