//! Route-subsystem error type.

use thiserror::Error;

use ry_core::{NodeId, RailError, SegmentId};

/// Errors produced by `ry-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No path to the target within the search bound.  Callers must treat
    /// this as "cannot execute", not retry.
    #[error("no route from segment {from} to switch {to} within {max_segments} segments")]
    NoRoute {
        from: SegmentId,
        to: NodeId,
        max_segments: usize,
    },

    #[error(transparent)]
    Rail(#[from] RailError),
}

pub type RouteResult<T> = Result<T, RouteError>;
