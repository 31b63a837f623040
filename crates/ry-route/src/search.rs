//! Breadth-first search to a named switch.
//!
//! Used when a move order targets a *specific* switch node rather than "the
//! Nth switch ahead".  The search explores outward from the start location in
//! both directions simultaneously and respects switch topology: entering a
//! switch from its entrance offers both exits; entering from an exit leg only
//! continues through the entrance (the "fouling" case).

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use ry_core::NodeId;
use ry_track::{Location, SegmentEnd, TrackGraph};

use crate::error::{RouteError, RouteResult};
use crate::walk::switch_margin;

// ── SwitchRoute ───────────────────────────────────────────────────────────────

/// The result of a successful search: how far the target switch is and from
/// which side it is approached.
#[derive(Copy, Clone, Debug)]
pub struct SwitchRoute {
    /// Accumulated distance from the start location to the switch node.
    pub distance_m: f32,
    /// `true` when the route arrives on one of the switch's exit legs — the
    /// approaching consist fouls the other route.
    pub fouling_approach: bool,
    /// The switch's fouling distance, captured so callers don't need the
    /// graph to finish the computation.
    pub fouling_m: f32,
    /// The segment the route arrives on.
    pub via: ry_core::SegmentId,
}

impl SwitchRoute {
    /// Distance to the point of conflict cleared: on a fouling approach the
    /// fouling distance is added so a consist stopping here does not obstruct
    /// the switch's other route.
    pub fn cleared_distance_m(&self) -> f32 {
        let extra = if self.fouling_approach { self.fouling_m } else { 0.0 };
        (self.distance_m + extra).max(0.0)
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// One frontier entry: travelling along `segment` toward its `toward` end,
/// having accumulated `distance_m` over `depth` segments.
#[derive(Copy, Clone)]
struct Frontier {
    segment: ry_core::SegmentId,
    toward: SegmentEnd,
    distance_m: f32,
    depth: usize,
}

/// Find the nearest topologically valid path from `start` to the switch at
/// `target`, searching both directions, visiting each directed segment at
/// most once, and giving up beyond `max_segments` route length.
///
/// Errors with [`RouteError::NoRoute`] when the bound is exhausted — the
/// caller must treat that as "cannot execute".
pub fn route_to_switch<G: TrackGraph>(
    graph: &G,
    start: Location,
    target: NodeId,
    max_segments: usize,
) -> RouteResult<SwitchRoute> {
    // Fails fast with NotASwitch for joints and dead ends.
    let target_decode = graph.decode_switch(target)?;

    let mut visited: FxHashSet<(ry_core::SegmentId, SegmentEnd)> = FxHashSet::default();
    let mut queue: VecDeque<Frontier> = VecDeque::new();

    // Seed both directions of travel from the start point.
    for loc in [start, start.flipped()] {
        queue.push_back(Frontier {
            segment: loc.segment,
            toward: loc.facing,
            distance_m: graph.distance_until_end(&loc)?,
            depth: 1,
        });
    }

    while let Some(head) = queue.pop_front() {
        if !visited.insert((head.segment, head.toward)) {
            continue;
        }

        let node = graph.node_at(head.segment, head.toward)?;
        if node == target {
            let fouling_approach = head.segment != target_decode.enter;
            debug!(%target, distance_m = head.distance_m, fouling_approach, "switch route found");
            return Ok(SwitchRoute {
                distance_m: head.distance_m.max(0.0),
                fouling_approach,
                fouling_m: graph.fouling_distance(target),
                via: head.segment,
            });
        }
        if head.depth >= max_segments {
            continue;
        }

        // Topologically valid continuations from `node`.
        let mut push = |next: ry_core::SegmentId| -> RouteResult<()> {
            let toward = if graph.node_at(next, SegmentEnd::A)? == node {
                SegmentEnd::B
            } else {
                SegmentEnd::A
            };
            queue.push_back(Frontier {
                segment: next,
                toward,
                distance_m: head.distance_m + graph.segment_length(next)?,
                depth: head.depth + 1,
            });
            Ok(())
        };

        if graph.is_switch(node) {
            let sw = graph.decode_switch(node)?;
            if head.segment == sw.enter {
                push(sw.normal)?;
                push(sw.reverse)?;
            } else {
                push(sw.enter)?;
            }
        } else if !graph.is_dead_end(node) {
            for seg in graph.segments_at(node) {
                if *seg != head.segment {
                    push(*seg)?;
                }
            }
        }
    }

    Err(RouteError::NoRoute {
        from: start.segment,
        to: target,
        max_segments,
    })
}

/// Travel distance for a move order that stops before or after a *named*
/// switch: the searched route plus the same clearance table the counting
/// walk uses, plus the train length when the consist must clear the switch.
pub fn distance_to_named_switch<G: TrackGraph>(
    graph: &G,
    start: Location,
    target: NodeId,
    before: bool,
    train_length_m: f32,
    max_segments: usize,
) -> RouteResult<f32> {
    let route = route_to_switch(graph, start, target, max_segments)?;
    let mut distance_m =
        route.distance_m + switch_margin(before, !route.fouling_approach, route.fouling_m);
    if !before {
        distance_m += train_length_m;
    }
    Ok(distance_m.max(0.0))
}
