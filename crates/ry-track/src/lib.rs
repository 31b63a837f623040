//! `ry-track` — track graph interface and in-memory track map.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`location`] | `SegmentEnd`, `Location`                              |
//! | [`graph`]    | `TrackGraph` trait, `SwitchDecode`                    |
//! | [`map`]      | `TrackMap`, `TrackMapBuilder`                         |
//! | [`error`]    | `TrackError`, `TrackResult<T>`                        |
//!
//! # Ownership of switch state
//!
//! The track graph is the *sole owner* of switch throw state.  Commands and
//! the distance calculator read it through [`TrackGraph::is_thrown`] and
//! request mutations through [`TrackGraph::set_thrown`]; nothing outside the
//! graph holds a private copy.  The graph is always passed in as an explicit
//! dependency, never reached through a global.

pub mod error;
pub mod graph;
pub mod location;
pub mod map;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TrackError, TrackResult};
pub use graph::{SwitchDecode, TrackGraph};
pub use location::{Location, SegmentEnd};
pub use map::{TrackMap, TrackMapBuilder};
