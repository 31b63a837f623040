//! The `TrackGraph` trait — the boundary between the scheduler and the track
//! network it drives trains across.
//!
//! # Pluggability
//!
//! `ry-route` and `ry-runner` consume the graph exclusively through this
//! trait, so a host application can back it with its own network model
//! without touching the framework core.  The default [`TrackMap`] is
//! sufficient for tests and small yards.
//!
//! # Primitives vs. provided operations
//!
//! Implementors supply the nine primitive lookups; the traversal operations
//! (`next_segment`, `location_by_moving`, `distance_until_end`) are provided
//! methods built only on those primitives, so every implementation shares one
//! topology-walk semantics.
//!
//! [`TrackMap`]: crate::map::TrackMap

use ry_core::units::MAX_SEGMENT_HOPS;
use ry_core::{NodeId, RailResult, SegmentId};

use crate::location::{Location, SegmentEnd};

// ── SwitchDecode ──────────────────────────────────────────────────────────────

/// A switch node resolved into its three legs.
///
/// `enter` is the single segment on the points side; `normal` and `reverse`
/// are the two exits selected by the throw state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SwitchDecode {
    pub enter: SegmentId,
    pub normal: SegmentId,
    pub reverse: SegmentId,
}

// ── TrackGraph ────────────────────────────────────────────────────────────────

/// Read access to track topology plus ownership of switch throw state.
pub trait TrackGraph {
    // ── Primitive lookups ─────────────────────────────────────────────────

    fn segment_length(&self, seg: SegmentId) -> RailResult<f32>;

    /// The node at the given end of a segment.
    fn node_at(&self, seg: SegmentId, end: SegmentEnd) -> RailResult<NodeId>;

    /// All segments connected to a node.  Empty for unknown nodes.
    fn segments_at(&self, node: NodeId) -> &[SegmentId];

    fn is_switch(&self, node: NodeId) -> bool;

    fn decode_switch(&self, node: NodeId) -> RailResult<SwitchDecode>;

    /// Current throw state: `false` = normal exit, `true` = reverse exit.
    fn is_thrown(&self, node: NodeId) -> RailResult<bool>;

    /// Request a throw-state change.  The graph is the sole owner of this
    /// state; callers must check [`is_locked`](Self::is_locked) first.
    fn set_thrown(&mut self, node: NodeId, thrown: bool) -> RailResult<()>;

    /// `true` if an external interlock currently forbids operating this
    /// switch.  Locked switches refuse `set_thrown` at the command layer.
    fn is_locked(&self, node: NodeId) -> bool;

    /// Minimum clearance from this switch so a standing car does not obstruct
    /// the other route.
    fn fouling_distance(&self, node: NodeId) -> f32;

    /// `true` if track ends at this node.
    fn is_dead_end(&self, node: NodeId) -> bool {
        self.segments_at(node).len() <= 1
    }

    // ── Provided traversal operations ─────────────────────────────────────

    /// The node the location is travelling toward.
    fn node_ahead(&self, loc: &Location) -> RailResult<NodeId> {
        self.node_at(loc.segment, loc.facing)
    }

    /// Remaining distance on the current segment in the direction of travel.
    fn distance_until_end(&self, loc: &Location) -> RailResult<f32> {
        let len = self.segment_length(loc.segment)?;
        Ok(match loc.facing {
            SegmentEnd::B => len - loc.offset_m,
            SegmentEnd::A => loc.offset_m,
        })
    }

    /// The segment a movement continues onto after reaching `node` via
    /// `arriving_via`, or `None` at a dead end.
    ///
    /// Switch topology: arriving on an exit leg always continues through the
    /// entrance; arriving on the entrance follows the throw state.  Ordinary
    /// joints continue onto the unique other segment.
    fn next_segment(&self, node: NodeId, arriving_via: SegmentId) -> RailResult<Option<SegmentId>> {
        if self.is_dead_end(node) {
            return Ok(None);
        }
        if self.is_switch(node) {
            let sw = self.decode_switch(node)?;
            if arriving_via != sw.enter {
                return Ok(Some(sw.enter));
            }
            return Ok(Some(if self.is_thrown(node)? { sw.reverse } else { sw.normal }));
        }
        Ok(self
            .segments_at(node)
            .iter()
            .copied()
            .find(|&s| s != arriving_via))
    }

    /// The location reached by travelling `distance_m` from `start`, walking
    /// through nodes per [`next_segment`](Self::next_segment).
    ///
    /// Clamps at dead ends; bounded by [`MAX_SEGMENT_HOPS`], after which the
    /// position reached so far is returned best-effort.
    fn location_by_moving(&self, start: Location, distance_m: f32) -> RailResult<Location> {
        let mut loc = start;
        let mut remaining = distance_m.max(0.0);

        for _ in 0..MAX_SEGMENT_HOPS {
            let until_end = self.distance_until_end(&loc)?;
            if remaining <= until_end {
                let offset_m = match loc.facing {
                    SegmentEnd::B => loc.offset_m + remaining,
                    SegmentEnd::A => loc.offset_m - remaining,
                };
                return Ok(Location { offset_m, ..loc });
            }
            remaining -= until_end;

            let node = self.node_ahead(&loc)?;
            let Some(next) = self.next_segment(node, loc.segment)? else {
                // Dead end: clamp at the end of the current segment.
                let offset_m = match loc.facing {
                    SegmentEnd::B => self.segment_length(loc.segment)?,
                    SegmentEnd::A => 0.0,
                };
                return Ok(Location { offset_m, ..loc });
            };

            // Enter the next segment at whichever end touches `node`.
            let entered_at = if self.node_at(next, SegmentEnd::A)? == node {
                SegmentEnd::A
            } else {
                SegmentEnd::B
            };
            let offset_m = match entered_at {
                SegmentEnd::A => 0.0,
                SegmentEnd::B => self.segment_length(next)?,
            };
            loc = Location {
                segment: next,
                offset_m,
                facing: entered_at.opposite(),
            };
        }
        Ok(loc)
    }
}
