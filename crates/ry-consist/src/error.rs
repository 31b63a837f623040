//! Consist-subsystem error type.

use thiserror::Error;

/// Errors produced by `ry-consist` builders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistError {
    #[error("a consist needs at least one car")]
    Empty,

    #[error("locomotive index {index} out of range for {cars} cars")]
    LocomotiveOutOfRange { index: usize, cars: usize },

    #[error("both end locations must be set before build")]
    MissingEndLocation,
}

pub type ConsistResult<T> = Result<T, ConsistError>;
