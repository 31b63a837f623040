//! `ry-schedule` — the command model and its persistence format.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`command`]  | [`Command`], [`MoveTarget`], per-variant wage/display   |
//! | [`schedule`] | [`Schedule`] and its loss-tolerant deserialization      |
//! | [`loader`]   | schedule-collection save/load over `Read`/`Write`       |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Wire format
//!
//! Commands persist as JSON records discriminated by a `"$Type"` field:
//!
//! ```json
//! { "$Type": "Move",
//!   "direction": "Forward",
//!   "target": { "$Type": "SwitchCount",
//!               "count": 2, "before": true, "clear_under_train": false } }
//! ```
//!
//! Deserialization never fails the whole document over one bad record: an
//! unknown `$Type` or a missing field becomes [`Command::Invalid`], and the
//! owning schedule reports `is_valid() == false` until repaired.

pub mod command;
pub mod error;
pub mod loader;
pub mod schedule;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{Command, MoveTarget};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_schedules, save_schedules};
pub use schedule::Schedule;
