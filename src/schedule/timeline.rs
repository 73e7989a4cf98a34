//! The fixed deployment timeline.

use chrono::{NaiveDate, NaiveDateTime};

use super::{Phase, ScheduleError};

type Ymd = (i32, u32, u32);

/// (key, name, start, end, description)
const DEPLOYMENT_TIMELINE: [(&str, &str, Ymd, Ymd, &str); 5] = [
    (
        "pre_deployment_review",
        "Pre-Deployment Review",
        (2026, 1, 30),
        (2026, 1, 31),
        "Verify all items in deployment checklist",
    ),
    (
        "testing",
        "Testing",
        (2026, 1, 31),
        (2026, 2, 2),
        "Run automated and manual accessibility tests",
    ),
    (
        "final_sign_off",
        "Final Sign-Off",
        (2026, 2, 2),
        (2026, 2, 3),
        "Obtain approval from all stakeholders",
    ),
    ("deployment", "Deployment", (2026, 2, 3), (2026, 2, 3), "Push code to production server"),
    (
        "post_deployment_monitoring",
        "Post-Deployment Monitoring",
        (2026, 2, 3),
        (2026, 2, 10),
        "Monitor for issues in first 24 hours and first week",
    ),
];

/// Build the deployment phases in schedule order.
pub(super) fn deployment_phases() -> Result<Vec<Phase>, ScheduleError> {
    DEPLOYMENT_TIMELINE
        .iter()
        .map(|&(key, name, start, end, description)| -> Result<Phase, ScheduleError> {
            let start = midnight(start).ok_or_else(|| invalid(name, start))?;
            let end = midnight(end).ok_or_else(|| invalid(name, end))?;
            Ok(Phase::new(key, name, start, end, description))
        })
        .collect()
}

fn midnight((year, month, day): Ymd) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

fn invalid(phase: &str, (year, month, day): Ymd) -> ScheduleError {
    ScheduleError::InvalidDate { phase: phase.to_string(), date: format!("{year}-{month}-{day}") }
}
