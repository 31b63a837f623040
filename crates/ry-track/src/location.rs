//! Positions on the track graph.

use std::fmt;

use ry_core::SegmentId;

// ── SegmentEnd ────────────────────────────────────────────────────────────────

/// One of the two endpoints of a track segment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentEnd {
    A,
    B,
}

impl SegmentEnd {
    pub fn opposite(self) -> SegmentEnd {
        match self {
            SegmentEnd::A => SegmentEnd::B,
            SegmentEnd::B => SegmentEnd::A,
        }
    }
}

impl fmt::Display for SegmentEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentEnd::A => write!(f, "A"),
            SegmentEnd::B => write!(f, "B"),
        }
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A position on the track graph: a segment, an offset along it, and the end
/// toward which travel proceeds.
///
/// `offset_m` is always measured from end A, regardless of `facing`, so a
/// location and its flipped twin describe the same physical point.
///
/// Invariant: `0 ≤ offset_m ≤ segment length`.  The track map never produces
/// a location outside that range; builders of hand-made locations are
/// responsible for it.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub segment: SegmentId,
    pub offset_m: f32,
    /// The segment end travel is headed toward.
    pub facing: SegmentEnd,
}

impl Location {
    pub fn new(segment: SegmentId, offset_m: f32, facing: SegmentEnd) -> Self {
        Self { segment, offset_m, facing }
    }

    /// The same physical point with the direction of travel reversed.
    pub fn flipped(self) -> Location {
        Location { facing: self.facing.opposite(), ..self }
    }

    /// `true` if the two locations are the same physical point, ignoring
    /// direction of travel.
    pub fn same_spot(&self, other: &Location) -> bool {
        self.segment == other.segment && (self.offset_m - other.offset_m).abs() < 1e-3
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:.1}m→{}", self.segment, self.offset_m, self.facing)
    }
}
