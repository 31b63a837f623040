//! Run state machine vocabulary.

use rustc_hash::FxHashMap;

use ry_core::NodeId;
use ry_track::Location;

// ── RunState ──────────────────────────────────────────────────────────────────

/// Where a run currently stands.  `index` is always the command being (or
/// about to be) executed.
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    /// Created but not yet started.
    Idle,
    /// Between commands; only ever observed transiently.
    Running { index: usize },
    /// Suspended inside command `index` until `wait` resolves.
    Waiting { index: usize, wait: WaitCondition },
    /// Terminal: cancelled at command `index`, nothing further executes.
    Cancelled { index: usize },
    /// Terminal: every command executed.
    Completed,
}

/// What a suspended run is waiting for.
#[derive(Clone, Debug, PartialEq)]
pub enum WaitCondition {
    /// A move order was issued; waiting for the consist to start rolling.
    MoveStart { target: Location },
    /// Rolling; waiting for the consist to come to rest at `target`.
    MoveStop { target: Location },
    /// Timed wait with time still to burn.
    Elapsed { remaining_secs: f32 },
    /// Waiting for the crew to dismiss the notice issued with this key.
    Notice { key: u64 },
}

// ── RunEvent ──────────────────────────────────────────────────────────────────

/// External observations fed into [`Runner::on_event`].
///
/// Events that do not match the pending wait are ignored, so hosts can
/// broadcast everything they see without filtering.
///
/// [`Runner::on_event`]: crate::Runner::on_event
#[derive(Clone, Debug, PartialEq)]
pub enum RunEvent {
    MotionStarted,
    MotionStopped { location: Location },
    /// The crew changed the consist's orders out from under the run.
    OrdersChanged,
    TimeAdvanced { secs: f32 },
    NoticeDismissed { key: u64 },
}

// ── RunStatus ─────────────────────────────────────────────────────────────────

/// Coarse run state reported back to the host after every call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Waiting,
    Cancelled,
    Completed,
}

// ── RunContext ────────────────────────────────────────────────────────────────

/// Per-run working state.  Created fresh for every run, never persisted,
/// written only by the owning runner.
#[derive(Debug, Default)]
pub struct RunContext {
    /// Where the last move order will (or did) come to rest.
    pub last_location: Option<Location>,
    /// Wage units accrued so far; charged once at the terminal state.
    pub wage: u32,
    /// Prior throw state of every switch this run has touched, keyed by
    /// node.  `RestoreSwitches` drains it.
    pub switch_restore: FxHashMap<NodeId, bool>,
    /// Cooperative cancellation flag, honoured at command boundaries.
    pub stop_requested: bool,
}
