use crate::BPError;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Parsing of the whitespace-separated text format
pub mod parser;

/// Scoring of loosely-typed (JSON) solutions
pub mod json_solution;

/// Any failure while building an instance from a description is the description's fault.
pub(crate) fn into_malformed(err: BPError) -> BPError {
    match err {
        BPError::InvalidArgument(msg) => BPError::MalformedInstance(msg),
        err => err,
    }
}
