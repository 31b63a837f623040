//! Yard distance constants and traversal bounds.
//!
//! All distances are metres (`f32`).  The constants here are the fixed
//! operational parameters of the distance calculator; per-switch fouling
//! distances come from the track graph instead.

/// Nominal car length used when a move distance is expressed in car lengths.
pub const CAR_LENGTH_M: f32 = 12.2;

/// Slack added per coupling when summing a consist's total length, so the
/// whole train clears a switch with some room between cars.
pub const COUPLER_SLACK_M: f32 = 1.0;

/// Clearance left between the stopping point and a switch when no fouling
/// adjustment applies (approaching the switch from its entrance side).
pub const SWITCH_SAFETY_MARGIN_M: f32 = 6.0;

/// Hard bound on segment hops for every graph traversal.  Exceeding it is
/// treated as "target not found", never as an error.
pub const MAX_SEGMENT_HOPS: usize = 50;
