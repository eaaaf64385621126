use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the `bpe` front-end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BPEConfig {
    /// Seed for the PRNG. If undefined, sampling runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of random solutions drawn when sampling
    pub n_samples: usize,
    /// Directory against which relative instance and solution paths are resolved.
    /// If undefined, they are resolved against the working directory
    #[serde(default)]
    pub instance_dir: Option<PathBuf>,
}

impl Default for BPEConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_samples: 10_000,
            instance_dir: None,
        }
    }
}
