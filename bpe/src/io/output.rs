use binpack::io::ext_repr::{ExtBPBounds, ExtBPInstance, ExtBPSolution};
use serde::{Deserialize, Serialize};

use crate::config::BPEConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct InspectOutput {
    #[serde(flatten)]
    pub instance: ExtBPInstance,
    pub bounds: ExtBPBounds,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EvaluateOutput {
    pub bounds: ExtBPBounds,
    pub score: f64,
    /// Absent if the input could not be interpreted as a list of bin indices
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solution: Option<ExtBPSolution>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SampleOutput {
    pub bounds: ExtBPBounds,
    pub n_samples: usize,
    pub n_feasible: usize,
    pub best_score: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub best: Option<ExtBPSolution>,
    pub config: BPEConfig,
}
