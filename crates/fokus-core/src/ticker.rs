//! Background notification loop.
//!
//! One ticker task exists per active session. It polls the engine twice a
//! second, rings the notification sink in the final seconds and once on
//! completion, then exits on its own when the session is gone. The owner
//! keeps the handle so a `stop` can cancel the task immediately instead of
//! waiting for the next poll.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::timer::{TimerEngine, TimerStatus};

/// How often the ticker polls the engine.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Final stretch, in seconds, during which near-end alerts fire.
pub const NEAR_END_WINDOW_SECS: u64 = 5;

/// Sink for audible/visual alerts, rung on near-end and completion.
pub trait Notifier: Send + Sync {
    fn alert(&self);
}

/// Terminal bell notifier.
pub struct TerminalBell;

impl Notifier for TerminalBell {
    fn alert(&self) {
        use std::io::Write;
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}

/// Deduplicates near-end alerts: at most one per distinct remaining second,
/// even when polled faster than once a second.
#[derive(Debug, Default)]
struct NearEndGate {
    warned_at: Option<u64>,
}

impl NearEndGate {
    fn should_alert(&mut self, remaining_secs: u64) -> bool {
        let near_end = remaining_secs > 0 && remaining_secs <= NEAR_END_WINDOW_SECS;
        if near_end && self.warned_at != Some(remaining_secs) {
            self.warned_at = Some(remaining_secs);
            return true;
        }
        false
    }
}

/// Handle to the background polling task for one session.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the polling loop for the engine's current session.
    pub fn spawn<C>(engine: TimerEngine<C>, notifier: Arc<dyn Notifier>) -> Self
    where
        C: Clock + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            let mut gate = NearEndGate::default();
            loop {
                interval.tick().await;
                match engine.poll() {
                    TimerStatus::Idle => {
                        debug!("no active session, ticker exiting");
                        break;
                    }
                    TimerStatus::Completed => {
                        notifier.alert();
                        info!("session complete");
                        break;
                    }
                    TimerStatus::Running { remaining_secs, .. } => {
                        if gate.should_alert(remaining_secs) {
                            notifier.alert();
                            debug!(remaining_secs, "near-end alert");
                        }
                    }
                }
            }
        });
        Self { handle }
    }

    /// Cancel the loop. Safe to call after the task already finished.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the loop to exit (cancellation counts as exited).
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
