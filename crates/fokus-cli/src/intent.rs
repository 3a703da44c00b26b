//! Rule-based intent classifier.
//!
//! Maps free-text input to a timer command by keyword matching against a
//! fixed vocabulary. Matching is substring-based and order-sensitive: the
//! first matching group wins, so "start timer, how much time left?" starts
//! a timer rather than checking one.

/// Classified user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start { minutes: u64 },
    CheckTime,
    Pause,
    Resume,
    Stop,
    Motivation,
    Stats,
    Help,
    Unknown,
}

const START_WORDS: &[&str] = &["start", "begin", "run", "timer", "focus"];
const CHECK_WORDS: &[&str] = &["time", "remaining", "left", "progress", "how long"];
const PAUSE_WORDS: &[&str] = &["pause", "hold"];
const RESUME_WORDS: &[&str] = &["resume", "continue", "go"];
const STOP_WORDS: &[&str] = &["stop", "halt", "cancel"];
const MOTIVATION_WORDS: &[&str] = &["motivation", "motivate", "inspire"];
const STATS_WORDS: &[&str] = &["stats", "statistics", "summary"];
const HELP_WORDS: &[&str] = &["help", "?"];

fn matches_any(input: &str, words: &[&str]) -> bool {
    words.iter().any(|w| input.contains(w))
}

/// Classify raw user input.
///
/// `default_minutes` is used when a start request carries no number.
pub fn classify(input: &str, default_minutes: u64) -> Intent {
    let lower = input.trim().to_lowercase();

    if matches_any(&lower, START_WORDS) {
        let minutes = first_integer(&lower).unwrap_or(default_minutes);
        Intent::Start { minutes }
    } else if matches_any(&lower, CHECK_WORDS) {
        Intent::CheckTime
    } else if matches_any(&lower, PAUSE_WORDS) {
        Intent::Pause
    } else if matches_any(&lower, RESUME_WORDS) {
        Intent::Resume
    } else if matches_any(&lower, STOP_WORDS) {
        Intent::Stop
    } else if matches_any(&lower, MOTIVATION_WORDS) {
        Intent::Motivation
    } else if matches_any(&lower, STATS_WORDS) {
        Intent::Stats
    } else if matches_any(&lower, HELP_WORDS) {
        Intent::Help
    } else {
        Intent::Unknown
    }
}

/// First run of ASCII digits in the text, if any.
fn first_integer(text: &str) -> Option<u64> {
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}
