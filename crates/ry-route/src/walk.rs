//! Forward walk with switch counting.
//!
//! This is the workhorse behind "stop before/after the Nth switch" move
//! orders.  It hops segment to segment from a start location, counting
//! switches, following switch topology by current throw state, and finally
//! applying the before/after clearance adjustment from [`switch_margin`].

use tracing::debug;

use ry_core::units::{MAX_SEGMENT_HOPS, SWITCH_SAFETY_MARGIN_M};
use ry_core::NodeId;
use ry_track::{Location, SegmentEnd, TrackGraph};

use crate::error::RouteResult;

// ── Request / outcome ─────────────────────────────────────────────────────────

/// Parameters of a switch-counting walk.
#[derive(Copy, Clone, Debug)]
pub struct SwitchWalk {
    /// Which switch to stop at, counted from 1.
    pub count: u32,
    /// Stop short of the switch instead of clearing it.
    pub before: bool,
    /// Count switches from the train's rear so switches currently under the
    /// consist are included.  Only meaningful with `before == false`.
    pub clear_under_train: bool,
}

/// Result of a switch-counting walk.
#[derive(Copy, Clone, Debug)]
pub struct WalkOutcome {
    /// Travel distance satisfying the stop condition, clamped `≥ 0`.  When
    /// `found_all` is false this is the best-effort distance walked before
    /// the search gave up.
    pub distance_m: f32,
    /// The target switch, when found.
    pub target: Option<NodeId>,
    /// `true` if the requested switch count was reached.
    pub found_all: bool,
}

// ── Margin table ──────────────────────────────────────────────────────────────

/// Clearance adjustment applied at the target switch.
///
/// The asymmetry between the entrance and exit sides is load-bearing:
/// stopping *before* a switch approached from an exit leg must back off the
/// whole fouling zone, while from the entrance side a fixed safety margin
/// suffices.  Stopping *after* mirrors the table.
///
/// | before | facing entrance | adjustment        |
/// |--------|-----------------|-------------------|
/// | yes    | yes             | − safety margin   |
/// | yes    | no              | − fouling distance|
/// | no     | yes             | + fouling distance|
/// | no     | no              | + safety margin   |
pub fn switch_margin(before: bool, facing_entrance: bool, fouling_m: f32) -> f32 {
    match (before, facing_entrance) {
        (true, true) => -SWITCH_SAFETY_MARGIN_M,
        (true, false) => -fouling_m,
        (false, true) => fouling_m,
        (false, false) => SWITCH_SAFETY_MARGIN_M,
    }
}

// ── Walk ──────────────────────────────────────────────────────────────────────

/// Distance the consist must travel so that the `walk.count`-th switch ahead
/// of `start` satisfies the stop condition.
///
/// `train_length_m` is the consist's coupled length; it is used both to
/// restart the search from the rear (`clear_under_train`) and to extend an
/// "after" stop so the whole consist clears the switch.
///
/// Terminates when the target count is reached, a dead end is hit, or
/// [`MAX_SEGMENT_HOPS`] is exceeded — the latter two report
/// `found_all == false` with the distance walked so far.
pub fn switch_walk<G: TrackGraph>(
    graph: &G,
    start: Location,
    train_length_m: f32,
    walk: SwitchWalk,
) -> RouteResult<WalkOutcome> {
    debug_assert!(walk.count >= 1, "switch count is 1-based");

    let start = if walk.clear_under_train {
        // The train may already stand over the switch, so measure from the
        // rear of the consist instead of the front.
        let rear = graph
            .location_by_moving(start.flipped(), train_length_m)?
            .flipped();
        debug!(%rear, "walking from rear of consist");
        rear
    } else {
        start
    };

    let mut distance_m = 0.0f32;
    let mut segment = start.segment;
    let mut facing = start.facing;
    let mut switches_found = 0u32;
    let mut found_all = false;
    let mut target = None;

    for hop in 0..MAX_SEGMENT_HOPS {
        // The first hop only covers what is left of the start segment.
        distance_m += if hop == 0 {
            graph.distance_until_end(&start)?
        } else {
            graph.segment_length(segment)?
        };

        let node = graph.node_at(segment, facing)?;
        if graph.is_switch(node) {
            switches_found += 1;
            debug!(%node, distance_m, switches_found, "switch ahead");
            if switches_found >= walk.count {
                found_all = true;
                target = Some(node);
                break;
            }
        }

        let Some(next) = graph.next_segment(node, segment)? else {
            debug!(%node, "track ends before switch target");
            break;
        };
        // The next hop heads toward whichever end is NOT at this node.
        facing = if graph.node_at(next, SegmentEnd::A)? == node {
            SegmentEnd::B
        } else {
            SegmentEnd::A
        };
        segment = next;
    }

    if let Some(node) = target.filter(|_| found_all) {
        let decode = graph.decode_switch(node)?;
        let facing_entrance = decode.enter == segment;
        distance_m += switch_margin(walk.before, facing_entrance, graph.fouling_distance(node));

        // The distance so far was measured from the front of the train, so
        // clearing the switch needs the whole consist length on top — unless
        // the walk already started from the rear.
        if !walk.before && !walk.clear_under_train {
            distance_m += train_length_m;
        }
    }

    Ok(WalkOutcome {
        distance_m: distance_m.max(0.0),
        target,
        found_all,
    })
}

/// Distance from `start` to the end of track ahead, less the safety margin.
///
/// Returns the full walked distance (clamped `≥ 0`) even when the hop bound
/// is exceeded before a dead end appears.
pub fn distance_to_track_end<G: TrackGraph>(graph: &G, start: Location) -> RouteResult<f32> {
    let mut distance_m = 0.0f32;
    let mut segment = start.segment;
    let mut facing = start.facing;

    for hop in 0..MAX_SEGMENT_HOPS {
        distance_m += if hop == 0 {
            graph.distance_until_end(&start)?
        } else {
            graph.segment_length(segment)?
        };

        let node = graph.node_at(segment, facing)?;
        let Some(next) = graph.next_segment(node, segment)? else {
            break;
        };
        facing = if graph.node_at(next, SegmentEnd::A)? == node {
            SegmentEnd::B
        } else {
            SegmentEnd::A
        };
        segment = next;
    }

    Ok((distance_m - SWITCH_SAFETY_MARGIN_M).max(0.0))
}
