//! Unit tests for ry-track.

use ry_core::{NodeId, SegmentId};

use crate::{Location, SegmentEnd, TrackGraph, TrackMap, TrackMapBuilder};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// `n0 ──s0(50m)── n1`
fn straight() -> (TrackMap, SegmentId) {
    let mut b = TrackMapBuilder::new();
    let n0 = b.add_node();
    let n1 = b.add_node();
    let s0 = b.add_segment(n0, n1, 50.0);
    (b.build().unwrap(), s0)
}

/// A single turnout:
///
/// ```text
/// n0 ──enter(30m)── sw ──normal(40m)── n2
///                    └──reverse(25m)── n3
/// ```
struct Turnout {
    map: TrackMap,
    sw: NodeId,
    enter: SegmentId,
    normal: SegmentId,
    reverse: SegmentId,
}

fn turnout() -> Turnout {
    let mut b = TrackMapBuilder::new();
    let n0 = b.add_node();
    let sw = b.add_node();
    let n2 = b.add_node();
    let n3 = b.add_node();
    let enter = b.add_segment(n0, sw, 30.0);
    let normal = b.add_segment(sw, n2, 40.0);
    let reverse = b.add_segment(sw, n3, 25.0);
    b.make_switch(sw, enter, normal, reverse);
    Turnout { map: b.build().unwrap(), sw, enter, normal, reverse }
}

// ── Builder / map ─────────────────────────────────────────────────────────────

mod map {
    use super::*;

    #[test]
    fn csr_adjacency() {
        let t = turnout();
        assert_eq!(t.map.segments_at(t.sw).len(), 3);
        assert_eq!(t.map.segments_at(NodeId(0)), &[t.enter]);
        // Unknown node → empty slice, not a panic.
        assert!(t.map.segments_at(NodeId(99)).is_empty());
    }

    #[test]
    fn dead_end_detection() {
        let t = turnout();
        assert!(t.map.is_dead_end(NodeId(0)));
        assert!(t.map.is_dead_end(NodeId(2)));
        assert!(!t.map.is_dead_end(t.sw));
    }

    #[test]
    fn decode_and_throw_state() {
        let mut t = turnout();
        let decode = t.map.decode_switch(t.sw).unwrap();
        assert_eq!(decode.enter, t.enter);
        assert_eq!(decode.normal, t.normal);
        assert_eq!(decode.reverse, t.reverse);

        assert!(!t.map.is_thrown(t.sw).unwrap());
        t.map.set_thrown(t.sw, true).unwrap();
        assert!(t.map.is_thrown(t.sw).unwrap());
    }

    #[test]
    fn non_switch_refuses_switch_ops() {
        let mut t = turnout();
        assert!(t.map.decode_switch(NodeId(0)).is_err());
        assert!(t.map.is_thrown(NodeId(0)).is_err());
        assert!(t.map.set_thrown(NodeId(0), true).is_err());
        assert!(!t.map.is_locked(NodeId(0)));
    }

    #[test]
    fn interlock_flag() {
        let mut t = turnout();
        assert!(!t.map.is_locked(t.sw));
        t.map.set_locked(t.sw, true).unwrap();
        assert!(t.map.is_locked(t.sw));
    }

    #[test]
    fn malformed_switch_rejected_at_build() {
        // Switch node with only two connected segments.
        let mut b = TrackMapBuilder::new();
        let n0 = b.add_node();
        let n1 = b.add_node();
        let n2 = b.add_node();
        let s0 = b.add_segment(n0, n1, 10.0);
        let s1 = b.add_segment(n1, n2, 10.0);
        b.make_switch(n1, s0, s1, s1);
        assert!(b.build().is_err());
    }

    #[test]
    fn disconnected_switch_leg_rejected_at_build() {
        let mut b = TrackMapBuilder::new();
        let n0 = b.add_node();
        let sw = b.add_node();
        let n2 = b.add_node();
        let n3 = b.add_node();
        let enter = b.add_segment(n0, sw, 10.0);
        let normal = b.add_segment(sw, n2, 10.0);
        let reverse = b.add_segment(sw, n3, 10.0);
        // Far-away segment named as a leg.
        let stray = b.add_segment(n2, n3, 10.0);
        b.make_switch(sw, enter, normal, stray);
        let _ = reverse;
        assert!(b.build().is_err());
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

mod location {
    use super::*;

    #[test]
    fn flipped_keeps_physical_point() {
        let loc = Location::new(SegmentId(0), 12.0, SegmentEnd::B);
        let flipped = loc.flipped();
        assert_eq!(flipped.facing, SegmentEnd::A);
        assert!(loc.same_spot(&flipped));
        assert_eq!(flipped.flipped(), loc);
    }

    #[test]
    fn distance_until_end_respects_facing() {
        let (map, s0) = straight();
        let toward_b = Location::new(s0, 10.0, SegmentEnd::B);
        assert_eq!(map.distance_until_end(&toward_b).unwrap(), 40.0);
        assert_eq!(map.distance_until_end(&toward_b.flipped()).unwrap(), 10.0);
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

mod traversal {
    use super::*;

    #[test]
    fn next_segment_through_joint() {
        let mut b = TrackMapBuilder::new();
        let n0 = b.add_node();
        let n1 = b.add_node();
        let n2 = b.add_node();
        let s0 = b.add_segment(n0, n1, 30.0);
        let s1 = b.add_segment(n1, n2, 20.0);
        let map = b.build().unwrap();

        assert_eq!(map.next_segment(n1, s0).unwrap(), Some(s1));
        assert_eq!(map.next_segment(n1, s1).unwrap(), Some(s0));
        // Dead end.
        assert_eq!(map.next_segment(n2, s1).unwrap(), None);
    }

    #[test]
    fn next_segment_follows_throw_state() {
        let mut t = turnout();
        assert_eq!(t.map.next_segment(t.sw, t.enter).unwrap(), Some(t.normal));
        t.map.set_thrown(t.sw, true).unwrap();
        assert_eq!(t.map.next_segment(t.sw, t.enter).unwrap(), Some(t.reverse));
    }

    #[test]
    fn next_segment_from_exit_leads_to_entrance() {
        let t = turnout();
        assert_eq!(t.map.next_segment(t.sw, t.normal).unwrap(), Some(t.enter));
        assert_eq!(t.map.next_segment(t.sw, t.reverse).unwrap(), Some(t.enter));
    }

    #[test]
    fn move_within_segment() {
        let (map, s0) = straight();
        let start = Location::new(s0, 5.0, SegmentEnd::B);
        let moved = map.location_by_moving(start, 20.0).unwrap();
        assert_eq!(moved.segment, s0);
        assert!((moved.offset_m - 25.0).abs() < 1e-4);
    }

    #[test]
    fn move_across_switch_follows_topology() {
        let t = turnout();
        // 10 m into the entrance segment, heading at the switch (toward B).
        let start = Location::new(t.enter, 10.0, SegmentEnd::B);
        // 20 m remaining on enter + 15 m into the normal exit.
        let moved = t.map.location_by_moving(start, 35.0).unwrap();
        assert_eq!(moved.segment, t.normal);
        assert!((moved.offset_m - 15.0).abs() < 1e-4);
    }

    #[test]
    fn move_clamps_at_dead_end() {
        let (map, s0) = straight();
        let start = Location::new(s0, 40.0, SegmentEnd::B);
        let moved = map.location_by_moving(start, 500.0).unwrap();
        assert_eq!(moved.segment, s0);
        assert!((moved.offset_m - 50.0).abs() < 1e-4);
    }

    #[test]
    fn move_zero_distance_is_identity() {
        let (map, s0) = straight();
        let start = Location::new(s0, 17.5, SegmentEnd::A);
        assert_eq!(map.location_by_moving(start, 0.0).unwrap(), start);
    }
}
