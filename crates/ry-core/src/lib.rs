//! `ry-core` — foundational types for the `railyard` scheduling framework.
//!
//! This crate is a dependency of every other `ry-*` crate.  It intentionally
//! has no `ry-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`ids`]      | `NodeId`, `SegmentId`                              |
//! | [`direction`]| `TravelDirection`                                  |
//! | [`units`]    | yard distance constants and traversal bounds       |
//! | [`error`]    | `RailError`, `RailResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                          |
//! |---------|---------------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; required by `ry-schedule`.  |

pub mod direction;
pub mod error;
pub mod ids;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::TravelDirection;
pub use error::{RailError, RailResult};
pub use ids::{NodeId, SegmentId};
