//! # fokus core library
//!
//! Core logic for the fokus terminal Pomodoro assistant: the timer state
//! machine, its background notification ticker, and the in-memory session
//! history. The interactive front end (intent parsing, canned responses,
//! terminal presentation) lives in the CLI crate and only calls into the
//! types exported here.
//!
//! ## Key components
//!
//! - [`TimerEngine`]: the single-session state machine; concurrency-safe
//!   time accounting for start/pause/resume/stop and expiry detection
//! - [`Ticker`]: background poller driving near-end and completion alerts
//! - [`HistoryLog`]: append-only record of terminated sessions, aggregated
//!   by [`Statistics`]
//! - [`Clock`]: injectable time source so every time-dependent behavior is
//!   deterministically testable

pub mod clock;
pub mod error;
pub mod history;
pub mod ticker;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, TimerError};
pub use history::{HistoryLog, HistoryRecord, SessionOutcome, Statistics};
pub use ticker::{Notifier, TerminalBell, Ticker};
pub use timer::{StopSummary, TimerEngine, TimerStatus, MAX_MINUTES};
