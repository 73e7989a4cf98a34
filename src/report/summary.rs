//! Console summary of a generated report.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::schedule::{PhaseStatus, Schedule};

/// Snapshot of schedule progress at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Date the summary was taken (`YYYY-MM-DD`)
    pub date: String,

    /// Percentage of completed phases
    pub overall_progress: f64,

    /// Per-phase status in schedule order
    pub phases: Vec<PhaseSummary>,
}

/// One phase line in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSummary {
    pub name: String,
    pub status: PhaseStatus,
    pub remaining_days: i64,
}

impl ProgressSummary {
    /// Classify every phase of `schedule` at `now`.
    pub fn new(schedule: &Schedule, now: NaiveDateTime) -> Self {
        let phases = schedule
            .iter()
            .map(|phase| {
                let progress = phase.progress(now);
                PhaseSummary {
                    name: phase.name.clone(),
                    status: progress.status,
                    remaining_days: progress.remaining_days,
                }
            })
            .collect();

        Self {
            date: now.format("%Y-%m-%d").to_string(),
            overall_progress: schedule.overall_progress(now),
            phases,
        }
    }

    /// Plain text rendering used on the console.
    pub fn to_text(&self) -> String {
        let mut out = format!("Overall Progress: {:.0}%\n\n", self.overall_progress);
        out.push_str("Deployment Timeline Summary:\n");
        out.push_str(&"-".repeat(60));
        out.push('\n');
        for phase in &self.phases {
            out.push_str(&format!("  {}: {}\n", phase.name, phase.status));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_summary_on_february_first() {
        let schedule = Schedule::deployment().unwrap();
        let summary = ProgressSummary::new(&schedule, day(2026, 2, 1));

        assert_eq!(summary.date, "2026-02-01");
        assert!((summary.overall_progress - 20.0).abs() < f64::EPSILON);
        assert_eq!(summary.phases.len(), 5);
        assert_eq!(summary.phases[1].status, PhaseStatus::InProgress);
        assert_eq!(summary.phases[1].remaining_days, 1);
    }

    #[test]
    fn test_summary_text() {
        let schedule = Schedule::deployment().unwrap();
        let text = ProgressSummary::new(&schedule, day(2026, 2, 15)).to_text();

        assert!(text.starts_with("Overall Progress: 100%\n"));
        assert!(text.contains("  Pre-Deployment Review: Completed\n"));
        assert!(text.contains("  Post-Deployment Monitoring: Completed\n"));
    }

    #[test]
    fn test_summary_serializes_snake_case_status() {
        let schedule = Schedule::deployment().unwrap();
        let summary = ProgressSummary::new(&schedule, day(2026, 2, 1));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["phases"][1]["status"], "in_progress");
        assert_eq!(json["phases"][2]["status"], "scheduled");
        assert_eq!(json["overall_progress"], 20.0);
    }
}
