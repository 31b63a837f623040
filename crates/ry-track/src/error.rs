//! Track-subsystem error type.

use thiserror::Error;

use ry_core::{NodeId, RailError, SegmentId};

/// Errors produced by `ry-track`.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Rail(#[from] RailError),

    #[error("switch at {node} must connect exactly three segments, found {segments}")]
    MalformedSwitch { node: NodeId, segments: usize },

    #[error("declared switch leg {seg} is not connected to node {node}")]
    DisconnectedSwitchLeg { node: NodeId, seg: SegmentId },
}

pub type TrackResult<T> = Result<T, TrackError>;
