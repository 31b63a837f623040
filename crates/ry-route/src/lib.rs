//! `ry-route` — how far must the train move?
//!
//! Pure functions over a [`TrackGraph`]: nothing here mutates graph state.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`walk`]   | `switch_walk` (count the Nth switch ahead), `distance_to_track_end`, the before/after margin table |
//! | [`search`] | `route_to_switch` (breadth-first search to a named switch), `distance_to_named_switch` |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                           |
//!
//! # Distance policy
//!
//! Every public distance is clamped to `≥ 0`.  Both traversals are bounded by
//! [`MAX_SEGMENT_HOPS`](ry_core::units::MAX_SEGMENT_HOPS); exceeding the
//! bound means "not found", never an error or a hang.
//!
//! [`TrackGraph`]: ry_track::TrackGraph

pub mod error;
pub mod search;
pub mod walk;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use search::{SwitchRoute, distance_to_named_switch, route_to_switch};
pub use walk::{SwitchWalk, WalkOutcome, distance_to_track_end, switch_margin, switch_walk};
