//! Canned response renderer.
//!
//! Each response kind owns a handful of templates; one is picked at random
//! and its named placeholders substituted. If a template references a field
//! the caller did not supply, the unfilled template text is returned as-is.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Response categories the renderer knows templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Start,
    CheckTime,
    Pause,
    Resume,
    Stop,
    Stats,
    NoActiveTimer,
    TimerRunning,
}

const START_TEMPLATES: &[&str] = &[
    "Pomodoro started! Full focus for {duration} minutes. You've got this!",
    "A {duration} minute timer is running. Let's get to work!",
    "{duration} minutes on the clock. Time to be productive!",
];

const CHECK_TIME_TEMPLATES: &[&str] = &[
    "Remaining: {formatted} ({percentage}%)",
    "Progress: {formatted} | {progress_bar}",
    "{formatted} to go. Stay focused!",
];

const PAUSE_TEMPLATES: &[&str] = &[
    "Timer paused. Quick breather?",
    "Paused. Take a deep breath...",
    "On hold. Relax for a moment!",
];

const RESUME_TEMPLATES: &[&str] = &[
    "Timer resumed. Back to focus!",
    "Here we go again. Don't give up!",
    "Resuming. Keep at it!",
];

const STOP_TEMPLATES: &[&str] = &[
    "Timer stopped. {duration} minutes done. Nice work!",
    "Stopped. You stayed productive for {duration} minutes!",
    "Session over after {duration} minutes. Well done!",
];

const STATS_TEMPLATES: &[&str] = &[
    "Your statistics:\n   Total: {total_sessions} sessions\n   Time: {total_minutes} minutes ({total_hours}h)\n   Impressive!",
    "Daily performance:\n   Sessions: {total_sessions}\n   Total: {total_minutes} minutes\n   Keep it up!",
    "Summary:\n   {total_sessions} sessions finished\n   {total_minutes} productive minutes\n   Excellent work!",
];

const NO_ACTIVE_TIMER_TEMPLATES: &[&str] = &[
    "No timer is running right now.",
    "The timer hasn't been started yet.",
    "There's no active session.",
];

const TIMER_RUNNING_TEMPLATES: &[&str] = &[
    "A timer is still running! Use 'stop' to end it first.",
    "The timer is already going. Focus!",
    "A session is still in progress.",
];

const QUOTES: &[&str] = &[
    "Twenty-five minutes of undivided focus produces better work than hours of distracted effort.",
    "One task at a time. Pour everything into this one; you can finish it.",
    "Never underestimate small steps. Every finished session moves you closer to the goal.",
    "Real productivity is a habit built day by day. Stay consistent and the results will follow.",
    "Taking a break is not quitting. Good rest is fuel; balance is the key.",
];

fn templates_for(kind: ResponseKind) -> &'static [&'static str] {
    match kind {
        ResponseKind::Start => START_TEMPLATES,
        ResponseKind::CheckTime => CHECK_TIME_TEMPLATES,
        ResponseKind::Pause => PAUSE_TEMPLATES,
        ResponseKind::Resume => RESUME_TEMPLATES,
        ResponseKind::Stop => STOP_TEMPLATES,
        ResponseKind::Stats => STATS_TEMPLATES,
        ResponseKind::NoActiveTimer => NO_ACTIVE_TIMER_TEMPLATES,
        ResponseKind::TimerRunning => TIMER_RUNNING_TEMPLATES,
    }
}

/// Picks templates and substitutes named fields.
pub struct Renderer {
    rng: StdRng,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded renderer for reproducible template selection in tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Render one response of `kind` with the given named fields.
    pub fn respond(&mut self, kind: ResponseKind, fields: &[(&str, String)]) -> String {
        let template = templates_for(kind)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        fill(template, fields)
    }

    /// A random motivational quote.
    pub fn quote(&mut self) -> &'static str {
        QUOTES.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute `{name}` placeholders. A placeholder with no matching field
/// leaves the whole template untouched, mirroring a failed format call.
fn fill(template: &str, fields: &[(&str, String)]) -> String {
    for name in placeholder_names(template) {
        if !fields.iter().any(|(k, _)| *k == name) {
            return template.to_string();
        }
    }
    let mut out = template.to_string();
    for (name, value) in fields {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        names.push(&rest[open + 1..open + close]);
        rest = &rest[open + close + 1..];
    }
    names
}
