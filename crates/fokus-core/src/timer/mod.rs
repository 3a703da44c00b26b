mod engine;
mod session;

pub use engine::{StopSummary, TimerEngine, TimerStatus, MAX_MINUTES};
