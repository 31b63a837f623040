//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `RailError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{NodeId, SegmentId};

/// The top-level error type for `ry-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RailError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("segment {0} not found")]
    SegmentNotFound(SegmentId),

    #[error("node {0} is not a switch")]
    NotASwitch(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ry-*` crates.
pub type RailResult<T> = Result<T, RailError>;
