use crate::entities::BPInstance;
use crate::io::parser;
use crate::{BPError, Result};

/// Collects the inputs for a [`BPInstance`] from either of the two supported sources:
/// a textual instance description, or the explicit parameters.
///
/// If a description is supplied it takes precedence and the explicit parameters are ignored.
///
/// # Examples
///
/// ```
/// use binpack::entities::InstanceBuilder;
///
/// let from_params = InstanceBuilder::default()
///     .with_item_count(3)
///     .with_bin_capacity(10)
///     .with_weights(vec![4, 5, 6])
///     .build()
///     .unwrap();
///
/// let from_text = InstanceBuilder::default()
///     .with_description("3 10 4 5 6")
///     .build()
///     .unwrap();
///
/// assert_eq!(from_params, from_text);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    pub item_count: Option<usize>,
    pub bin_capacity: Option<u64>,
    pub weights: Option<Vec<u64>>,
    pub description: Option<String>,
}

impl InstanceBuilder {
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn with_bin_capacity(mut self, bin_capacity: u64) -> Self {
        self.bin_capacity = Some(bin_capacity);
        self
    }

    pub fn with_weights(mut self, weights: Vec<u64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Result<BPInstance> {
        match self {
            InstanceBuilder {
                description: Some(description),
                ..
            } => parser::parse_instance(&description),
            InstanceBuilder {
                item_count: Some(item_count),
                bin_capacity: Some(bin_capacity),
                weights: Some(weights),
                description: None,
            } => BPInstance::new(item_count, bin_capacity, weights),
            _ => Err(BPError::InvalidArgument(
                "either a description or item_count, bin_capacity and weights must be provided"
                    .into(),
            )),
        }
    }
}
