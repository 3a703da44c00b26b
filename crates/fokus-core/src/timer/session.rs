//! Mutable record of the single in-flight session.

use std::time::{Duration, Instant};

/// State of the one timer the process can run at a time.
///
/// Owned exclusively by the engine; all access goes through its lock.
/// `pause_started_at` is non-`None` iff the session is currently paused,
/// which in turn implies `active`.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionState {
    pub active: bool,
    pub started_at: Option<Instant>,
    pub requested: Duration,
    /// Sum of all closed pause intervals for this session.
    pub paused_total: Duration,
    pub pause_started_at: Option<Instant>,
}

impl SessionState {
    /// Focus time elapsed at `now`: wall time since start minus every paused
    /// interval, including a still-open pause.
    ///
    /// Saturating throughout, so a clock stepping backwards clamps to zero
    /// instead of panicking.
    pub fn elapsed(&self, now: Instant) -> Duration {
        let Some(started_at) = self.started_at else {
            return Duration::ZERO;
        };
        let wall = now.saturating_duration_since(started_at);
        let open_pause = self
            .pause_started_at
            .map(|p| now.saturating_duration_since(p))
            .unwrap_or(Duration::ZERO);
        wall.saturating_sub(self.paused_total)
            .saturating_sub(open_pause)
    }

    pub fn is_paused(&self) -> bool {
        self.pause_started_at.is_some()
    }

    /// Revert to inactive defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
