//! Schedule-subsystem error type.

use thiserror::Error;

/// Errors produced by `ry-schedule`.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
