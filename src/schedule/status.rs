//! Phase status classification.
//!
//! A phase's status is never stored: it is derived from the phase window and
//! the instant the question is asked.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Status of a phase relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// The phase has not started yet
    Scheduled,
    /// The phase window contains the current instant
    InProgress,
    /// The phase window has ended
    Completed,
}

impl PhaseStatus {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Emoji used next to the label in rendered reports.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Scheduled => "📅",
            Self::InProgress => "🔄",
            Self::Completed => "✅",
        }
    }

    /// Glyph and label, e.g. `🔄 In Progress`.
    pub fn indicator(self) -> String {
        format!("{} {}", self.glyph(), self.label())
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a phase at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseProgress {
    /// Derived status
    pub status: PhaseStatus,

    /// Whole days until the phase starts (Scheduled) or ends (In Progress).
    /// Always zero once Completed.
    pub remaining_days: i64,
}

/// Classify a phase window against `now`.
///
/// Both bounds are inclusive: `now == start` and `now == end` are in progress.
/// Day counts truncate toward zero, which is a floor here since the
/// difference is never negative for a well-formed window.
pub fn classify(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> PhaseProgress {
    if now < start {
        PhaseProgress { status: PhaseStatus::Scheduled, remaining_days: (start - now).num_days() }
    } else if now > end {
        PhaseProgress { status: PhaseStatus::Completed, remaining_days: 0 }
    } else {
        PhaseProgress { status: PhaseStatus::InProgress, remaining_days: (end - now).num_days() }
    }
}
