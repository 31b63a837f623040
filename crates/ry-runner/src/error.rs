//! Runner-subsystem error type.

use thiserror::Error;

use ry_core::RailError;
use ry_route::RouteError;

/// Errors produced by `ry-runner`.
///
/// Precondition failures (locked switches, unreachable targets) are *not*
/// errors — they cancel the run through the observer.  Errors here are
/// host-side faults: broken schedules or a track graph that rejects a query
/// mid-run.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("schedule {name:?} is not executable")]
    InvalidSchedule { name: String },

    #[error("invalid command reached the executor: {reason}")]
    InvalidCommand { reason: String },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Rail(#[from] RailError),
}

pub type RunnerResult<T> = Result<T, RunnerError>;
