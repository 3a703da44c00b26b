//! Session history and statistics.
//!
//! Terminated sessions are appended to an in-memory log that lives for the
//! process lifetime. Records are immutable once written; nothing is ever
//! evicted or reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOutcome {
    /// The user stopped the timer before it ran out.
    Stopped,
    /// The timer ran to its full duration.
    Completed,
}

/// Immutable summary of one terminated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub ended_at: DateTime<Utc>,
    pub requested_minutes: u64,
    /// Whole minutes of focus actually elapsed (paused time excluded).
    pub completed_minutes: u64,
    pub outcome: SessionOutcome,
}

/// Aggregate view over the history log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub sessions: usize,
    pub total_minutes: u64,
    /// Total focus time in hours, rounded to 2 decimals.
    pub total_hours: f64,
}

/// Append-only log of terminated sessions.
#[derive(Debug, Default)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate statistics, or `None` when nothing has been recorded yet.
    ///
    /// Stopped sessions count toward the totals with the minutes they
    /// actually accumulated.
    pub fn statistics(&self) -> Option<Statistics> {
        if self.records.is_empty() {
            return None;
        }
        let total_minutes: u64 = self.records.iter().map(|r| r.completed_minutes).sum();
        let total_hours = (total_minutes as f64 / 60.0 * 100.0).round() / 100.0;
        Some(Statistics {
            sessions: self.records.len(),
            total_minutes,
            total_hours,
        })
    }
}
