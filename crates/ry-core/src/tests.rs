//! Unit tests for ry-core.

use crate::{NodeId, SegmentId, TravelDirection};

#[test]
fn invalid_sentinel_is_default() {
    assert_eq!(NodeId::default(), NodeId::INVALID);
    assert_eq!(SegmentId::default(), SegmentId::INVALID);
}

#[test]
fn index_casts_to_usize() {
    assert_eq!(NodeId(7).index(), 7);
    assert_eq!(SegmentId(3).index(), 3);
}

#[test]
fn display_includes_type_name() {
    assert_eq!(format!("{}", SegmentId(3)), "SegmentId(3)");
}

#[test]
fn direction_opposite() {
    assert_eq!(TravelDirection::Forward.opposite(), TravelDirection::Reverse);
    assert_eq!(TravelDirection::Reverse.opposite(), TravelDirection::Forward);
    assert!(TravelDirection::Forward.is_forward());
    assert!(!TravelDirection::Reverse.is_forward());
}

#[test]
fn direction_display_matches_crew_speech() {
    assert_eq!(TravelDirection::Forward.to_string(), "forward");
    assert_eq!(TravelDirection::Reverse.to_string(), "back");
}
