//! Timer engine implementation.
//!
//! The engine is a wall-clock-based state machine guarding the single
//! session and the history log behind one lock. It has no internal thread;
//! both the foreground command path and the background ticker call into it,
//! and natural expiry is detected inside [`TimerEngine::poll`].
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |    \
//!         stop    natural expiry (detected by poll)
//!           v        v
//!         Idle (history record appended)
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use super::session::SessionState;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TimerError};
use crate::history::{HistoryLog, HistoryRecord, SessionOutcome, Statistics};

/// Longest focus interval the engine accepts; larger requests are capped.
pub const MAX_MINUTES: u64 = 120;

/// Width of the rendered progress bar, in cells.
const BAR_WIDTH: u64 = 20;

/// Snapshot returned by [`TimerEngine::poll`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TimerStatus {
    /// No session is running.
    Idle,
    /// The session just ran out; its history record has been appended.
    /// Subsequent polls return `Idle`.
    Completed,
    Running {
        remaining_secs: u64,
        elapsed_secs: u64,
        /// Whole-percent progress, clamped to 0..=100.
        percentage: u8,
        /// Remaining time as `MM:SS`.
        formatted: String,
        /// 20-cell bar plus percentage, e.g. `[████████░░░░░░░░░░░░] 40%`.
        progress_bar: String,
    },
}

/// Result of a successful [`TimerEngine::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopSummary {
    /// Whole minutes of focus accumulated before the stop.
    pub completed_minutes: u64,
}

struct Inner {
    session: SessionState,
    history: HistoryLog,
}

/// Core timer engine.
///
/// Cheap to clone; clones share the same session and history. All operations
/// are synchronous and run under a single mutex, with no I/O held across it.
pub struct TimerEngine<C: Clock = SystemClock> {
    clock: C,
    inner: Arc<Mutex<Inner>>,
}

impl<C: Clock> Clone for TimerEngine<C> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl TimerEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimerEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            inner: Arc::new(Mutex::new(Inner {
                session: SessionState::default(),
                history: HistoryLog::new(),
            })),
        }
    }

    fn locked(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another caller panicked mid-operation;
        // the state itself stays consistent, so keep going.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a focus session of `minutes` minutes.
    ///
    /// Requests above [`MAX_MINUTES`] are capped; zero is rejected. Fails
    /// with `AlreadyActive` while a session is running -- the engine never
    /// implicitly resets. Returns the effective duration in minutes.
    pub fn start(&self, minutes: u64) -> Result<u64> {
        if minutes == 0 {
            return Err(TimerError::InvalidDuration { minutes });
        }
        let minutes = minutes.min(MAX_MINUTES);

        let mut inner = self.locked();
        if inner.session.active {
            return Err(TimerError::AlreadyActive);
        }
        inner.session = SessionState {
            active: true,
            started_at: Some(self.clock.now()),
            requested: Duration::from_secs(minutes * 60),
            paused_total: Duration::ZERO,
            pause_started_at: None,
        };
        debug!(minutes, "session started");
        Ok(minutes)
    }

    /// Pause the running session.
    pub fn pause(&self) -> Result<()> {
        let mut inner = self.locked();
        if !inner.session.active {
            return Err(TimerError::NoActiveTimer);
        }
        if inner.session.is_paused() {
            return Err(TimerError::AlreadyPaused);
        }
        inner.session.pause_started_at = Some(self.clock.now());
        debug!("session paused");
        Ok(())
    }

    /// Resume a paused session, folding the closed pause into the total.
    pub fn resume(&self) -> Result<()> {
        let now = self.clock.now();
        let mut inner = self.locked();
        if !inner.session.active {
            return Err(TimerError::NoActiveTimer);
        }
        let Some(pause_started_at) = inner.session.pause_started_at.take() else {
            return Err(TimerError::NotPaused);
        };
        inner.session.paused_total += now.saturating_duration_since(pause_started_at);
        debug!("session resumed");
        Ok(())
    }

    /// Stop the session and record it with a `Stopped` outcome.
    ///
    /// Works from a paused state too: the elapsed computation already
    /// subtracts the open pause, so no explicit resume is required first.
    pub fn stop(&self) -> Result<StopSummary> {
        let now = self.clock.now();
        let mut inner = self.locked();
        if !inner.session.active {
            return Err(TimerError::NoActiveTimer);
        }
        let elapsed = inner.session.elapsed(now);
        let completed_minutes = elapsed.as_secs() / 60;
        let requested_minutes = inner.session.requested.as_secs() / 60;
        inner.session.reset();
        inner.history.append(HistoryRecord {
            ended_at: Utc::now(),
            requested_minutes,
            completed_minutes,
            outcome: SessionOutcome::Stopped,
        });
        debug!(completed_minutes, "session stopped");
        Ok(StopSummary { completed_minutes })
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Current timer status.
    ///
    /// This is the sole place natural expiry is detected: when elapsed time
    /// reaches the requested duration the session is reset and a `Completed`
    /// history record appended, all under the lock. Racing callers therefore
    /// record at most one completion; whoever comes second sees `Idle`.
    pub fn poll(&self) -> TimerStatus {
        let now = self.clock.now();
        let mut inner = self.locked();
        if !inner.session.active {
            return TimerStatus::Idle;
        }

        let elapsed = inner.session.elapsed(now);
        let requested = inner.session.requested;
        if elapsed >= requested {
            let requested_minutes = requested.as_secs() / 60;
            inner.session.reset();
            inner.history.append(HistoryRecord {
                ended_at: Utc::now(),
                requested_minutes,
                completed_minutes: requested_minutes,
                outcome: SessionOutcome::Completed,
            });
            debug!(requested_minutes, "session completed");
            return TimerStatus::Completed;
        }

        let remaining_secs = requested.saturating_sub(elapsed).as_secs();
        let percentage = percentage_of(elapsed, requested);
        TimerStatus::Running {
            remaining_secs,
            elapsed_secs: elapsed.as_secs(),
            percentage,
            formatted: format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60),
            progress_bar: render_bar(percentage),
        }
    }

    /// True while a session is live (running or paused).
    pub fn is_active(&self) -> bool {
        self.locked().session.active
    }

    /// Aggregate history statistics; `None` before any session has ended.
    pub fn statistics(&self) -> Option<Statistics> {
        self.locked().history.statistics()
    }
}

fn percentage_of(elapsed: Duration, requested: Duration) -> u8 {
    if requested.is_zero() {
        return 0;
    }
    let pct = (elapsed.as_secs_f64() / requested.as_secs_f64() * 100.0).floor();
    pct.clamp(0.0, 100.0) as u8
}

fn render_bar(percentage: u8) -> String {
    let filled = (BAR_WIDTH * percentage as u64 / 100) as usize;
    let mut bar = String::from("[");
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(BAR_WIDTH as usize - filled));
    bar.push_str(&format!("] {percentage}%"));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn engine() -> (TimerEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (TimerEngine::with_clock(clock.clone()), clock)
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn start_rejects_zero_duration() {
        let (engine, _clock) = engine();
        assert_eq!(
            engine.start(0),
            Err(TimerError::InvalidDuration { minutes: 0 })
        );
        assert!(!engine.is_active());
    }

    #[test]
    fn start_caps_duration_at_two_hours() {
        let (engine, _clock) = engine();
        assert_eq!(engine.start(200), Ok(120));
        match engine.poll() {
            TimerStatus::Running { remaining_secs, .. } => {
                assert_eq!(remaining_secs, 120 * 60);
            }
            other => panic!("expected Running, got {other:?}"),
        }
    }

    #[test]
    fn second_start_fails_and_leaves_session_untouched() {
        let (engine, clock) = engine();
        engine.start(25).unwrap();
        clock.advance(secs(60));
        assert_eq!(engine.start(10), Err(TimerError::AlreadyActive));
        // The first 25-minute session keeps counting down.
        match engine.poll() {
            TimerStatus::Running { remaining_secs, .. } => {
                assert_eq!(remaining_secs, 25 * 60 - 60);
            }
            other => panic!("expected Running, got {other:?}"),
        }
    }

    #[test]
    fn fresh_session_reports_full_remaining_and_zero_progress() {
        let (engine, _clock) = engine();
        engine.start(25).unwrap();
        match engine.poll() {
            TimerStatus::Running {
                remaining_secs,
                percentage,
                progress_bar,
                formatted,
                ..
            } => {
                assert_eq!(remaining_secs, 1500);
                assert_eq!(percentage, 0);
                assert_eq!(formatted, "25:00");
                assert_eq!(progress_bar, format!("[{}] 0%", "░".repeat(20)));
            }
            other => panic!("expected Running, got {other:?}"),
        }
    }

    #[test]
    fn remaining_is_non_increasing_while_running() {
        let (engine, clock) = engine();
        engine.start(2).unwrap();
        let mut last = u64::MAX;
        for _ in 0..12 {
            clock.advance(secs(10));
            match engine.poll() {
                TimerStatus::Running { remaining_secs, .. } => {
                    assert!(remaining_secs <= last);
                    last = remaining_secs;
                }
                TimerStatus::Completed => return,
                TimerStatus::Idle => panic!("session vanished"),
            }
        }
        panic!("session never completed");
    }

    #[test]
    fn pause_excludes_time_from_elapsed() {
        let (engine, clock) = engine();
        engine.start(10).unwrap();
        clock.advance(secs(60));
        engine.pause().unwrap();
        clock.advance(secs(300));
        engine.resume().unwrap();
        match engine.poll() {
            TimerStatus::Running {
                remaining_secs,
                elapsed_secs,
                ..
            } => {
                assert_eq!(remaining_secs, 540);
                assert_eq!(elapsed_secs, 60);
            }
            other => panic!("expected Running, got {other:?}"),
        }
    }

    #[test]
    fn repeated_pause_resume_cycles_do_not_double_count() {
        let (engine, clock) = engine();
        engine.start(30).unwrap();
        for _ in 0..5 {
            clock.advance(secs(10));
            engine.pause().unwrap();
            clock.advance(secs(100));
            engine.resume().unwrap();
        }
        match engine.poll() {
            TimerStatus::Running { elapsed_secs, .. } => assert_eq!(elapsed_secs, 50),
            other => panic!("expected Running, got {other:?}"),
        }
    }

    #[test]
    fn pause_state_errors() {
        let (engine, _clock) = engine();
        assert_eq!(engine.pause(), Err(TimerError::NoActiveTimer));
        assert_eq!(engine.resume(), Err(TimerError::NoActiveTimer));
        assert_eq!(engine.stop().unwrap_err(), TimerError::NoActiveTimer);

        engine.start(25).unwrap();
        assert_eq!(engine.resume(), Err(TimerError::NotPaused));
        engine.pause().unwrap();
        assert_eq!(engine.pause(), Err(TimerError::AlreadyPaused));
    }

    #[test]
    fn expiry_boundary_counts_as_completed() {
        let (engine, clock) = engine();
        engine.start(25).unwrap();
        clock.advance(secs(1500));
        assert_eq!(engine.poll(), TimerStatus::Completed);
        assert_eq!(engine.poll(), TimerStatus::Idle);

        let stats = engine.statistics().unwrap();
        assert_eq!(stats.sessions, 1);
        assert_eq!(stats.total_minutes, 25);
    }

    #[test]
    fn stop_records_whole_minutes_completed() {
        let (engine, clock) = engine();
        engine.start(25).unwrap();
        clock.advance(secs(150));
        let summary = engine.stop().unwrap();
        assert_eq!(summary.completed_minutes, 2);
        assert!(!engine.is_active());

        let stats = engine.statistics().unwrap();
        assert_eq!(stats.sessions, 1);
        assert_eq!(stats.total_minutes, 2);
    }

    #[test]
    fn stop_from_paused_state_works_without_resume() {
        let (engine, clock) = engine();
        engine.start(10).unwrap();
        clock.advance(secs(120));
        engine.pause().unwrap();
        clock.advance(secs(600));
        let summary = engine.stop().unwrap();
        assert_eq!(summary.completed_minutes, 2);
    }

    #[test]
    fn statistics_none_before_any_session_ends() {
        let (engine, _clock) = engine();
        assert!(engine.statistics().is_none());
        engine.start(25).unwrap();
        assert!(engine.statistics().is_none());
    }

    #[test]
    fn percentage_floors_and_clamps() {
        assert_eq!(percentage_of(secs(0), secs(1500)), 0);
        assert_eq!(percentage_of(secs(749), secs(1500)), 49);
        assert_eq!(percentage_of(secs(1500), secs(1500)), 100);
        assert_eq!(percentage_of(secs(2000), secs(1500)), 100);
    }

    #[test]
    fn bar_fill_tracks_percentage() {
        assert_eq!(render_bar(0), format!("[{}] 0%", "░".repeat(20)));
        assert_eq!(
            render_bar(42),
            format!("[{}{}] 42%", "█".repeat(8), "░".repeat(12))
        );
        assert_eq!(render_bar(100), format!("[{}] 100%", "█".repeat(20)));
    }
}
