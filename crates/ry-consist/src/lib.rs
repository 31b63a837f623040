//! `ry-consist` — the rolling stock a schedule acts on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`car`]     | `Car`, per-end [`EndGear`] pneumatic/coupler state      |
//! | [`order`]   | `MotionMode`, `MotionOrder` (the actuator output)       |
//! | [`consist`] | the [`Consist`] trait commands are written against      |
//! | [`train`]   | `TrainSet` in-memory implementation + builder           |
//! | [`error`]   | `ConsistError`, `ConsistResult<T>`                      |
//!
//! The execution engine never talks to a concrete train type: every command
//! is written against [`Consist`], and the host plugs in whatever actuates
//! its real vehicles.  [`TrainSet`] exists for tests and demos.

pub mod car;
pub mod consist;
pub mod error;
pub mod order;
pub mod train;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Car, EndGear};
pub use consist::Consist;
pub use error::{ConsistError, ConsistResult};
pub use order::{MotionMode, MotionOrder};
pub use train::{TrainSet, TrainSetBuilder};
