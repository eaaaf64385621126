use crate::Result;
use crate::entities::BPInstance;
use crate::io::ext_repr::ExtBPInstance;
use crate::io::into_malformed;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtBPInstance) -> Result<BPInstance> {
    BPInstance::new(
        ext_instance.item_count,
        ext_instance.bin_capacity,
        ext_instance.weights.clone(),
    )
    .map_err(into_malformed)
}
