//! Problem representation and scoring for the one-dimensional Bin Packing Problem.
//!
//! A [`BPInstance`](entities::BPInstance) holds item weights and a uniform bin capacity.
//! It can score candidate assignments and draw random ones, but it does not search for good
//! assignments itself. Any optimizer can drive it through the [`Problem`](entities::Problem) trait.

/// Entities to model the Bin Packing Problem
pub mod entities;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::BPError;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, BPError>;
