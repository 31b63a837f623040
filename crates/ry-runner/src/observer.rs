//! Run observer callbacks.

use ry_schedule::Command;

/// Callbacks invoked by the runner at key points of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_message` carries user-visible text
/// (precondition failures, tolerant no-ops); `on_notice` pairs a message with
/// the correlation key a [`RunEvent::NoticeDismissed`] must echo.
///
/// [`RunEvent::NoticeDismissed`]: crate::RunEvent::NoticeDismissed
pub trait RunObserver {
    /// Called before each command executes.
    fn on_command_start(&mut self, _index: usize, _command: &Command) {}

    /// User-visible message about the run (abort reasons, skipped steps).
    fn on_message(&mut self, _text: &str) {}

    /// A `NoticeWait` command posted a notice awaiting dismissal.
    fn on_notice(&mut self, _key: u64, _message: &str) {}

    /// The run was cancelled at command `index`.
    fn on_cancelled(&mut self, _index: usize) {}

    /// The run executed every command.
    fn on_completed(&mut self) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
