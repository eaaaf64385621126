use thiserror::Error;

/// Errors that can occur while constructing a [`BPInstance`](crate::entities::BPInstance).
/// Evaluating a solution never fails, see [`PENALTY`](crate::entities::PENALTY).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BPError {
    /// Explicit parameters are missing or inconsistent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A textual or external instance description could not be understood
    #[error("malformed instance: {0}")]
    MalformedInstance(String),
}
