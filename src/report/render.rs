//! Markdown rendering of the weekly status report.

use chrono::{Datelike, Duration, NaiveDateTime};

use super::content::{self, PhaseDetail};
use crate::core::Config;
use crate::schedule::{Phase, Schedule};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SECTION_BREAK: &str = "---\n\n";

/// Renders the status report for a schedule.
///
/// Rendering is a pure function of the instant passed to [`render`]: the same
/// instant always yields the same document.
///
/// [`render`]: ReportRenderer::render
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer<'a> {
    schedule: &'a Schedule,
    config: &'a Config,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer over a schedule.
    pub fn new(schedule: &'a Schedule, config: &'a Config) -> Self {
        Self { schedule, config }
    }

    /// Render the full report as of `now`.
    pub fn render(&self, now: NaiveDateTime) -> String {
        let progress = self.schedule.overall_progress(now);
        tracing::debug!(
            date = %now.format(DATE_FORMAT),
            progress,
            phases = self.schedule.len(),
            "Rendering status report"
        );

        let mut md = String::with_capacity(8 * 1024);
        self.header(&mut md, now, progress);
        self.timeline_table(&mut md, now);
        self.phase_details(&mut md, now);
        accessibility_fixes(&mut md);
        wcag_compliance(&mut md);
        key_metrics(&mut md);
        documentation_status(&mut md);
        repository_status(&mut md);
        next_steps(&mut md);
        risk_assessment(&mut md);
        recommendations(&mut md);
        success_criteria(&mut md);
        contacts(&mut md);
        self.metadata(&mut md, now);
        md
    }

    fn header(&self, md: &mut String, now: NaiveDateTime, progress: f64) {
        let title = &self.config.title;

        md.push_str(&format!("# {title} - Weekly Status Report\n\n"));
        md.push_str(&format!("**Report Date:** {}  \n", now.format(DATE_FORMAT)));
        md.push_str(&format!("**Week Number:** {}  \n", now.iso_week().week()));
        md.push_str(&format!("**Project:** {}  \n", self.config.project_name));
        md.push_str("**Status:** Deployment In Progress  \n\n");
        md.push_str(SECTION_BREAK);

        md.push_str("## Executive Summary\n\n");
        md.push_str(&format!(
            "This automated weekly status report provides an overview of the {title} deployment \
             progress. The project is on track for successful deployment with all accessibility \
             improvements implemented and documented.\n\n"
        ));
        md.push_str(&format!("**Overall Progress:** {progress:.0}%\n\n"));
        md.push_str(SECTION_BREAK);
    }

    fn timeline_table(&self, md: &mut String, now: NaiveDateTime) {
        md.push_str("## Deployment Timeline Status\n\n");
        md.push_str("The following table shows the current status of each deployment phase:\n\n");
        md.push_str("| Phase | Start Date | End Date | Status | Days Remaining |\n");
        md.push_str("|-------|-----------|----------|--------|-----------------|\n");

        for phase in self.schedule.iter() {
            let progress = phase.progress(now);
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                phase.name,
                phase.start.format(DATE_FORMAT),
                phase.end.format(DATE_FORMAT),
                progress.status.indicator(),
                progress.remaining_days
            ));
        }

        md.push('\n');
        md.push_str(SECTION_BREAK);
    }

    fn phase_details(&self, md: &mut String, now: NaiveDateTime) {
        md.push_str("## Phase Details\n\n");

        for phase in self.schedule.iter() {
            let detail = content::phase_detail(&phase.key);
            let heading = detail.map_or(phase.name.as_str(), |d| d.heading);

            md.push_str(&format!("### {heading}\n"));
            md.push_str(&format!("**Status:** {}  \n", phase.status(now)));
            md.push_str(&format!("**Description:** {}  \n", phase.description));
            md.push_str(&format!("**Duration:** {}\n\n", duration_label(phase)));

            if let Some(detail) = detail {
                detail_lists(md, detail);
            }
            md.push_str(SECTION_BREAK);
        }
    }

    fn metadata(&self, md: &mut String, now: NaiveDateTime) {
        let next_report =
            now.checked_add_signed(Duration::days(7)).unwrap_or(NaiveDateTime::MAX);

        md.push_str("## Report Metadata\n\n");
        md.push_str(&format!("**Generated:** {}  \n", now.format(TIMESTAMP_FORMAT)));
        md.push_str("**Report Type:** Automated Weekly Status Report  \n");
        md.push_str(&format!("**Next Report:** {}  \n", next_report.format(DATE_FORMAT)));
        md.push_str("**Status:** ✅ Ready for Deployment\n\n");
        md.push_str(SECTION_BREAK);
        md.push_str(&format!(
            "*This is an automated report generated by the {} Status Report Generator.*\n",
            self.config.title
        ));
        md.push_str(
            "*For more information, see IMPLEMENTATION_SUMMARY.md and DEPLOYMENT_CHECKLIST.md*\n",
        );
    }
}

/// `2 days (Jan 30 - Jan 31)`, or `1 day (Feb 3)` for a single-day window.
fn duration_label(phase: &Phase) -> String {
    let days = phase.duration_days();
    let start = phase.start.format("%b %-d");
    if days == 1 {
        format!("1 day ({start})")
    } else {
        format!("{days} days ({start} - {})", phase.end.format("%b %-d"))
    }
}

fn detail_lists(md: &mut String, detail: &PhaseDetail) {
    md.push_str("**Key Activities:**\n");
    for activity in detail.activities {
        md.push_str(&format!("- {activity}\n"));
    }
    md.push('\n');

    if !detail.expected_results.is_empty() {
        md.push_str("**Expected Results:**\n");
        for result in detail.expected_results {
            md.push_str(&format!("- {result}\n"));
        }
        md.push('\n');
    }
}

fn accessibility_fixes(md: &mut String) {
    md.push_str("## Accessibility Improvements Summary\n\n");
    md.push_str(&format!(
        "A total of **{} critical accessibility improvements** have been implemented:\n\n",
        content::ACCESSIBILITY_FIXES.len()
    ));
    for (i, fix) in content::ACCESSIBILITY_FIXES.iter().enumerate() {
        md.push_str(&format!("{}. ✅ {fix}\n", i + 1));
    }
    md.push_str("\n\n");
    md.push_str(SECTION_BREAK);
}

fn wcag_compliance(md: &mut String) {
    md.push_str("## WCAG 2.1 Level AA Compliance\n\n");
    md.push_str("The website now complies with the following WCAG 2.1 Level AA criteria:\n\n");
    for criterion in content::WCAG_CRITERIA {
        md.push_str(&format!("- ✅ {criterion}\n"));
    }
    md.push_str("\n\n");
    md.push_str(SECTION_BREAK);
}

fn key_metrics(md: &mut String) {
    md.push_str("## Key Metrics\n\n");
    md.push_str("| Metric | Target | Status |\n");
    md.push_str("|--------|--------|--------|\n");
    for (metric, target, status) in content::KEY_METRICS {
        md.push_str(&format!("| {metric} | {target} | {status} |\n"));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

fn documentation_status(md: &mut String) {
    md.push_str("## Documentation Status\n\n");
    md.push_str("The following documentation has been created and is ready for deployment:\n\n");
    for (file, size) in content::DOCUMENTATION {
        md.push_str(&format!("- ✅ {file} ({size})\n"));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

fn repository_status(md: &mut String) {
    md.push_str("## GitHub Repository Status\n\n");
    md.push_str(&format!("**Repository:** {}\n\n", content::REPOSITORY_URL));
    md.push_str("**Recent Commits:**\n");
    for (i, commit) in content::RECENT_COMMITS.iter().enumerate() {
        md.push_str(&format!("{}. {commit}\n", i + 1));
    }
    md.push('\n');
    md.push_str(&format!("**Branch Status:** {}\n\n", content::BRANCH_STATUS));
    md.push_str(SECTION_BREAK);
}

fn next_steps(md: &mut String) {
    md.push_str("## Next Steps\n\n");
    for (heading, actions) in content::NEXT_STEPS {
        md.push_str(&format!("### {heading}\n"));
        for (i, action) in actions.iter().enumerate() {
            md.push_str(&format!("{}. {action}\n", i + 1));
        }
        md.push('\n');
    }
    md.push_str(SECTION_BREAK);
}

fn risk_assessment(md: &mut String) {
    md.push_str("## Risk Assessment\n\n");
    md.push_str(&format!("**Overall Risk Level:** {}\n\n", content::OVERALL_RISK));
    md.push_str("| Risk | Probability | Impact | Mitigation |\n");
    md.push_str("|------|-------------|--------|-----------|\n");
    for (risk, probability, impact, mitigation) in content::RISKS {
        md.push_str(&format!("| {risk} | {probability} | {impact} | {mitigation} |\n"));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

fn recommendations(md: &mut String) {
    md.push_str("## Recommendations\n\n");
    for (i, (lead, rest)) in content::RECOMMENDATIONS.iter().enumerate() {
        md.push_str(&format!("{}. **{lead}**{rest}\n", i + 1));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

fn success_criteria(md: &mut String) {
    md.push_str("## Success Criteria\n\n");
    md.push_str("Deployment will be considered successful when:\n\n");
    for criterion in content::SUCCESS_CRITERIA {
        md.push_str(&format!("- ✅ {criterion}\n"));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

fn contacts(md: &mut String) {
    md.push_str("## Contact Information\n\n");
    md.push_str("**For Questions or Issues:**\n");
    for role in content::CONTACTS {
        md.push_str(&format!("- {role}: [Contact Info]\n"));
    }
    md.push('\n');
    md.push_str(SECTION_BREAK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn render_at(now: NaiveDateTime) -> String {
        let schedule = Schedule::deployment().unwrap();
        let config = Config::default();
        ReportRenderer::new(&schedule, &config).render(now)
    }

    #[test]
    fn test_header_block() {
        let report = render_at(day(2026, 2, 1));
        assert!(report.starts_with("# Rockin' Rockin' Boogie - Weekly Status Report\n\n"));
        assert!(report.contains("**Report Date:** 2026-02-01  \n"));
        assert!(report.contains("**Week Number:** 5  \n"));
        assert!(report.contains("**Project:** Rockin' Rockin' Boogie - A Legacy Restored  \n"));
        assert!(report.contains("**Status:** Deployment In Progress  \n"));
    }

    #[test]
    fn test_timeline_on_february_first() {
        let report = render_at(day(2026, 2, 1));
        assert!(report.contains("**Overall Progress:** 20%\n"));
        assert!(report
            .contains("| Pre-Deployment Review | 2026-01-30 | 2026-01-31 | ✅ Completed | 0 |\n"));
        assert!(report.contains("| Testing | 2026-01-31 | 2026-02-02 | 🔄 In Progress | 1 |\n"));
        assert!(report.contains("| Final Sign-Off | 2026-02-02 | 2026-02-03 | 📅 Scheduled | 1 |\n"));
        assert!(report.contains("| Deployment | 2026-02-03 | 2026-02-03 | 📅 Scheduled | 2 |\n"));
        assert!(report.contains(
            "| Post-Deployment Monitoring | 2026-02-03 | 2026-02-10 | 📅 Scheduled | 2 |\n"
        ));
    }

    #[test]
    fn test_timeline_after_every_phase() {
        let report = render_at(day(2026, 2, 15));
        assert!(report.contains("**Overall Progress:** 100%\n"));
        assert_eq!(report.matches("✅ Completed | 0 |").count(), 5);
        assert!(!report.contains("🔄 In Progress"));
        assert!(!report.contains("📅 Scheduled"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let now = day(2026, 2, 1) + Duration::hours(9) + Duration::minutes(30);
        assert_eq!(render_at(now), render_at(now));
    }

    #[test]
    fn test_phase_details() {
        let report = render_at(day(2026, 2, 1));
        assert!(report.contains(
            "### Testing Phase\n**Status:** In Progress  \n\
             **Description:** Run automated and manual accessibility tests  \n\
             **Duration:** 3 days (Jan 31 - Feb 2)\n\n**Key Activities:**\n"
        ));
        assert!(report.contains("**Expected Results:**\n- axe DevTools: 0 critical issues\n"));
        assert!(report.contains("### Pre-Deployment Review\n**Status:** Completed  \n"));
        assert!(report.contains("**Duration:** 1 day (Feb 3)\n"));
        assert!(report.contains("**Duration:** 8 days (Feb 3 - Feb 10)\n"));
        assert_eq!(report.matches("**Expected Results:**").count(), 1);
    }

    #[test]
    fn test_static_lists() {
        let report = render_at(day(2026, 2, 1));
        assert!(report.contains("A total of **12 critical accessibility improvements**"));
        assert!(report.contains("1. ✅ Add alt text to all images\n"));
        assert!(report.contains("12. ✅ Create accessibility fixes log\n"));
        assert!(report.contains("- ✅ 1.1.1 Non-text Content\n"));
        assert!(report.contains("- ✅ 4.1.3 Status Messages\n"));
        assert!(report.contains("| Accessibility Issues Fixed | 12 | ✅ 12/12 |\n"));
        assert!(report.contains("- ✅ AUTOMATED_TESTING_REPORT.md (9.4 KB)\n"));
        assert!(report.contains("**Overall Risk Level:** LOW ✅\n"));
        assert!(report.contains("1. **Continue with deployment as planned** - All accessibility"));
        assert!(report.contains("- Emergency Contact: [Contact Info]\n"));
    }

    #[test]
    fn test_metadata_footer() {
        let now = day(2026, 2, 1) + Duration::hours(8) + Duration::seconds(5);
        let report = render_at(now);
        assert!(report.contains("**Generated:** 2026-02-01 08:00:05  \n"));
        assert!(report.contains("**Next Report:** 2026-02-08  \n"));
        assert!(report.ends_with("DEPLOYMENT_CHECKLIST.md*\n"));
    }

    #[test]
    fn test_next_report_crosses_month_boundary() {
        let report = render_at(day(2026, 1, 28));
        assert!(report.contains("**Next Report:** 2026-02-04  \n"));
    }

    #[test]
    fn test_unknown_phase_uses_name_as_heading() {
        let schedule = Schedule::new(vec![Phase::new(
            "launch_party",
            "Launch Party",
            day(2026, 3, 1),
            day(2026, 3, 1),
            "Celebrate",
        )])
        .unwrap();
        let config = Config::default();
        let report = ReportRenderer::new(&schedule, &config).render(day(2026, 2, 1));

        assert!(report.contains("### Launch Party\n**Status:** Scheduled  \n"));
        assert!(report.contains("| Launch Party | 2026-03-01 | 2026-03-01 | 📅 Scheduled | 28 |\n"));
        assert!(!report.contains("**Key Activities:**"));
    }
}
