//! Command dispatch: wires classified intents to the timer engine and the
//! response renderer, and manages the ticker for the active session.

use std::sync::Arc;

use fokus_core::{Notifier, TerminalBell, Ticker, TimerEngine, TimerError, TimerStatus};
use tracing::debug;

use crate::intent::Intent;
use crate::render::{Renderer, ResponseKind};
use crate::ui;

const IDLE_HINT: &str = "No timer is running. Type 'start 25' to begin!";
const COMPLETED_MSG: &str = "Timer finished! Time for a break!";
const NO_DATA_MSG: &str = "No sessions recorded yet. Start one with 'start 25'!";
const UNKNOWN_MSG: &str = "Sorry, I didn't understand that. Type 'help' for a list of commands.";

pub struct App {
    engine: TimerEngine,
    ticker: Option<Ticker>,
    renderer: Renderer,
    notifier: Arc<dyn Notifier>,
}

impl App {
    pub fn new() -> Self {
        Self {
            engine: TimerEngine::new(),
            ticker: None,
            renderer: Renderer::new(),
            notifier: Arc::new(TerminalBell),
        }
    }

    /// Handle one classified command.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Start { minutes } => self.start(minutes),
            Intent::CheckTime => self.check_time(),
            Intent::Pause => self.pause(),
            Intent::Resume => self.resume(),
            Intent::Stop => self.stop(),
            Intent::Motivation => {
                let quote = self.renderer.quote();
                ui::print_response(quote);
            }
            Intent::Stats => self.stats(),
            Intent::Help => ui::print_help(),
            Intent::Unknown => ui::print_response(UNKNOWN_MSG),
        }
    }

    /// Cancel any background work before the process exits.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.shutdown();
        }
    }

    fn start(&mut self, minutes: u64) {
        match self.engine.start(minutes) {
            Ok(effective) => {
                // A finished ticker from the previous session may still be
                // around; replace it with one for the new session.
                if let Some(old) = self.ticker.take() {
                    old.shutdown();
                }
                self.ticker = Some(Ticker::spawn(
                    self.engine.clone(),
                    Arc::clone(&self.notifier),
                ));
                let text = self.renderer.respond(
                    ResponseKind::Start,
                    &[("duration", effective.to_string())],
                );
                ui::print_response(&text);
            }
            Err(TimerError::AlreadyActive) => {
                let text = self.renderer.respond(ResponseKind::TimerRunning, &[]);
                ui::print_response(&text);
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn check_time(&mut self) {
        match self.engine.poll() {
            TimerStatus::Idle => ui::print_response(IDLE_HINT),
            TimerStatus::Completed => ui::print_response(COMPLETED_MSG),
            TimerStatus::Running {
                percentage,
                formatted,
                progress_bar,
                ..
            } => {
                let text = self.renderer.respond(
                    ResponseKind::CheckTime,
                    &[
                        ("formatted", formatted),
                        ("percentage", percentage.to_string()),
                        ("progress_bar", progress_bar),
                    ],
                );
                ui::print_response(&text);
            }
        }
    }

    fn pause(&mut self) {
        match self.engine.pause() {
            Ok(()) => {
                let text = self.renderer.respond(ResponseKind::Pause, &[]);
                ui::print_response(&text);
            }
            Err(TimerError::NoActiveTimer) => {
                let text = self.renderer.respond(ResponseKind::NoActiveTimer, &[]);
                ui::print_response(&text);
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn resume(&mut self) {
        match self.engine.resume() {
            Ok(()) => {
                let text = self.renderer.respond(ResponseKind::Resume, &[]);
                ui::print_response(&text);
            }
            Err(TimerError::NoActiveTimer) => {
                let text = self.renderer.respond(ResponseKind::NoActiveTimer, &[]);
                ui::print_response(&text);
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn stop(&mut self) {
        match self.engine.stop() {
            Ok(summary) => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.shutdown();
                    debug!("ticker cancelled on stop");
                }
                let text = self.renderer.respond(
                    ResponseKind::Stop,
                    &[("duration", summary.completed_minutes.to_string())],
                );
                ui::print_response(&text);
            }
            Err(_) => {
                let text = self.renderer.respond(ResponseKind::NoActiveTimer, &[]);
                ui::print_response(&text);
            }
        }
    }

    fn stats(&mut self) {
        match self.engine.statistics() {
            None => ui::print_response(NO_DATA_MSG),
            Some(stats) => {
                let text = self.renderer.respond(
                    ResponseKind::Stats,
                    &[
                        ("total_sessions", stats.sessions.to_string()),
                        ("total_minutes", stats.total_minutes.to_string()),
                        ("total_hours", stats.total_hours.to_string()),
                    ],
                );
                ui::print_response(&text);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
