//! Deployment schedule.
//!
//! A [`Schedule`] is an ordered, validated list of [`Phase`]s. The fixed
//! deployment timeline is built by [`Schedule::deployment`]; nothing mutates
//! a schedule once it exists.

mod status;
mod timeline;

use std::collections::HashSet;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use status::{classify, PhaseProgress, PhaseStatus};

/// Errors raised when a schedule is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A schedule needs at least one phase.
    #[error("Schedule has no phases")]
    Empty,

    /// A phase ends before it starts.
    #[error("Phase '{phase}' ends ({end}) before it starts ({start})")]
    InvertedWindow { phase: String, start: NaiveDateTime, end: NaiveDateTime },

    /// Two phases share a lookup key.
    #[error("Duplicate phase key: {0}")]
    DuplicateKey(String),

    /// A hardcoded phase date is not a real calendar date.
    #[error("Phase '{phase}' has an invalid date: {date}")]
    InvalidDate { phase: String, date: String },
}

/// A named time window in the deployment schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// Stable lookup key (e.g. `testing`)
    pub key: String,

    /// Display name
    pub name: String,

    /// First instant of the phase (inclusive)
    pub start: NaiveDateTime,

    /// Last instant of the phase (inclusive)
    pub end: NaiveDateTime,

    /// What happens during the phase
    pub description: String,
}

impl Phase {
    /// Create a new phase.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Self { key: key.into(), name: name.into(), start, end, description: description.into() }
    }

    /// Classify this phase at `now`.
    pub fn progress(&self, now: NaiveDateTime) -> PhaseProgress {
        classify(now, self.start, self.end)
    }

    /// Shorthand for `self.progress(now).status`.
    pub fn status(&self, now: NaiveDateTime) -> PhaseStatus {
        self.progress(now).status
    }

    /// Number of calendar days the window touches, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }
}

/// Ordered, non-empty collection of phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    phases: Vec<Phase>,
}

impl Schedule {
    /// Build a schedule, rejecting empty lists, inverted windows and
    /// duplicate keys.
    pub fn new(phases: Vec<Phase>) -> Result<Self, ScheduleError> {
        if phases.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let mut seen = HashSet::new();
        for phase in &phases {
            if phase.end < phase.start {
                return Err(ScheduleError::InvertedWindow {
                    phase: phase.name.clone(),
                    start: phase.start,
                    end: phase.end,
                });
            }
            if !seen.insert(phase.key.as_str()) {
                return Err(ScheduleError::DuplicateKey(phase.key.clone()));
            }
        }

        Ok(Self { phases })
    }

    /// The fixed five-phase deployment timeline.
    pub fn deployment() -> Result<Self, ScheduleError> {
        Self::new(timeline::deployment_phases()?)
    }

    /// Iterate over phases in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    /// Look up a phase by key.
    pub fn get(&self, key: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.key == key)
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether there are no phases. Never true for a built schedule.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Number of phases completed at `now`.
    pub fn completed_count(&self, now: NaiveDateTime) -> usize {
        self.phases.iter().filter(|p| p.status(now) == PhaseStatus::Completed).count()
    }

    /// Percentage of completed phases at `now`, unrounded.
    pub fn overall_progress(&self, now: NaiveDateTime) -> f64 {
        self.completed_count(now) as f64 / self.phases.len() as f64 * 100.0
    }
}
