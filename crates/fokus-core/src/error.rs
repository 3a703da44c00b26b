//! Error types for fokus-core.
//!
//! Every variant is an expected, recoverable condition surfaced to the user;
//! none of them abort the process.

use thiserror::Error;

/// Timer operation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A session is already running; the engine never auto-resets it.
    #[error("a timer is already running")]
    AlreadyActive,

    /// Requested duration is outside the accepted domain.
    #[error("invalid duration: {minutes} minutes (must be at least 1)")]
    InvalidDuration { minutes: u64 },

    /// Pause/resume/stop was requested with nothing running.
    #[error("no timer is currently running")]
    NoActiveTimer,

    /// Pause requested while already paused.
    #[error("the timer is already paused")]
    AlreadyPaused,

    /// Resume requested while not paused.
    #[error("the timer is not paused")]
    NotPaused,
}

/// Result type alias for timer operations.
pub type Result<T, E = TimerError> = std::result::Result<T, E>;
