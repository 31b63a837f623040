//! `ry-runner` — executes a schedule against a track graph and a consist.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `RunState`, `WaitCondition`, `RunEvent`, `RunContext`   |
//! | [`runner`]   | the [`Runner`] state machine and command executors      |
//! | [`ledger`]   | [`Ledger`] wage sink + [`LedgerBook`] recording impl    |
//! | [`observer`] | [`RunObserver`] callbacks + [`NoopObserver`]            |
//! | [`error`]    | `RunnerError`, `RunnerResult<T>`                        |
//!
//! # Execution model
//!
//! One cooperative run per consist.  [`Runner::start`] executes commands in
//! order until the first suspension (a move in progress, a timed wait, or a
//! notice awaiting acknowledgement); the host then feeds observations in
//! through [`Runner::on_event`] and execution continues on the caller's
//! stack.  The runner is the only writer of its [`RunContext`]; independent
//! runners over different consists share nothing.

pub mod error;
pub mod ledger;
pub mod observer;
pub mod runner;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RunnerError, RunnerResult};
pub use ledger::{Ledger, LedgerBook};
pub use observer::{NoopObserver, RunObserver};
pub use runner::Runner;
pub use state::{RunContext, RunEvent, RunState, RunStatus, WaitCondition};
