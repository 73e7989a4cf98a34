//! Static report content.
//!
//! None of this depends on the clock; it is embedded verbatim in every report.

/// Extra content for a phase's detail section, matched by phase key.
#[derive(Debug, Clone, Copy)]
pub struct PhaseDetail {
    /// Key of the phase this detail belongs to
    pub key: &'static str,
    /// Section heading
    pub heading: &'static str,
    /// Key activities checklist
    pub activities: &'static [&'static str],
    /// Expected results, if the phase defines any
    pub expected_results: &'static [&'static str],
}

pub static PHASE_DETAILS: [PhaseDetail; 5] = [
    PhaseDetail {
        key: "pre_deployment_review",
        heading: "Pre-Deployment Review",
        activities: &[
            "Verify all items in deployment checklist",
            "Complete code quality validation",
            "Verify accessibility compliance",
            "Confirm performance benchmarks",
            "Review all documentation",
        ],
        expected_results: &[],
    },
    PhaseDetail {
        key: "testing",
        heading: "Testing Phase",
        activities: &[
            "Run axe DevTools accessibility scan",
            "Run WAVE accessibility checker",
            "Run Lighthouse performance audit",
            "Perform manual keyboard navigation testing",
            "Test with screen readers (NVDA/VoiceOver)",
            "Test on mobile devices",
            "Cross-browser compatibility testing",
        ],
        expected_results: &[
            "axe DevTools: 0 critical issues",
            "WAVE: 0 errors",
            "Lighthouse: ≥90 accessibility score",
            "All manual tests pass",
        ],
    },
    PhaseDetail {
        key: "final_sign_off",
        heading: "Final Sign-Off Phase",
        activities: &[
            "Obtain code review approval",
            "Obtain QA sign-off",
            "Obtain accessibility lead sign-off",
            "Obtain project manager approval",
            "Document any issues or concerns",
            "Finalize deployment plan",
        ],
        expected_results: &[],
    },
    PhaseDetail {
        key: "deployment",
        heading: "Deployment Phase",
        activities: &[
            "Create backup of current production",
            "Push code to production server",
            "Configure environment variables",
            "Configure SSL/HTTPS",
            "Bind custom domain rockinrockinboogie.com",
            "Verify deployment success",
        ],
        expected_results: &[],
    },
    PhaseDetail {
        key: "post_deployment_monitoring",
        heading: "Post-Deployment Monitoring Phase",
        activities: &[
            "Monitor error logs hourly (first 24 hours)",
            "Monitor performance metrics",
            "Check user feedback",
            "Verify analytics tracking",
            "Test all features manually",
            "Daily monitoring (first week)",
            "Weekly monitoring (ongoing)",
        ],
        expected_results: &[],
    },
];

/// Find the detail block for a phase key.
pub fn phase_detail(key: &str) -> Option<&'static PhaseDetail> {
    PHASE_DETAILS.iter().find(|d| d.key == key)
}

pub const ACCESSIBILITY_FIXES: [&str; 12] = [
    "Add alt text to all images",
    "Implement visible focus indicators",
    "Add pause/play button for gallery",
    "Add labels to all form controls",
    "Improve color contrast",
    "Set touch targets to 44x44px minimum",
    "Add ARIA attributes",
    "Add semantic HTML structure",
    "Support reduced motion",
    "Add keyboard shortcuts",
    "Create accessibility testing guide",
    "Create accessibility fixes log",
];

pub const WCAG_CRITERIA: [&str; 10] = [
    "1.1.1 Non-text Content",
    "1.3.1 Info and Relationships",
    "1.4.3 Contrast (Minimum)",
    "2.1.1 Keyboard",
    "2.2.2 Pause, Stop, Hide",
    "2.3.3 Animation from Interactions",
    "2.4.3 Focus Order",
    "2.4.7 Focus Visible",
    "2.5.5 Target Size",
    "4.1.3 Status Messages",
];

/// (metric, target, status)
pub const KEY_METRICS: [(&str, &str, &str); 5] = [
    ("Accessibility Issues Fixed", "12", "✅ 12/12"),
    ("WCAG Criteria Addressed", "10", "✅ 10/10"),
    ("Documentation Pages", "7", "✅ 7/7"),
    ("Critical Code Issues", "0", "✅ 0"),
    ("High-Priority Issues", "0", "✅ 0"),
];

/// (file, size)
pub const DOCUMENTATION: [(&str, &str); 7] = [
    ("ACCESSIBILITY_GUIDELINES.md", "18 KB"),
    ("ACCESSIBILITY_TESTING_GUIDE.md", "15 KB"),
    ("ACCESSIBILITY_FIXES_LOG.md", "16 KB"),
    ("ACCESSIBILITY_TODO.md", "18 KB"),
    ("AUTOMATED_TESTING_REPORT.md", "9.4 KB"),
    ("DEPLOYMENT_CHECKLIST.md", "12 KB"),
    ("IMPLEMENTATION_SUMMARY.md", "15 KB"),
];

pub const REPOSITORY_URL: &str = "https://github.com/tyannabattle-tbz/rockin-rockin-boogie-site";

pub const RECENT_COMMITS: [&str; 4] = [
    "Add comprehensive implementation summary - Ready for deployment",
    "Add comprehensive testing and deployment documentation",
    "Implement comprehensive accessibility fixes - WCAG Level AA compliance",
    "Consolidate full project build - all assets and configuration",
];

pub const BRANCH_STATUS: &str = "All changes on main branch, ready for deployment";

/// (heading, numbered actions)
pub const NEXT_STEPS: [(&str, &[&str]); 3] = [
    (
        "Immediate Actions (This Week)",
        &[
            "Run automated accessibility tests (axe DevTools, WAVE, Lighthouse)",
            "Perform manual testing (keyboard, screen reader, mobile)",
            "Complete pre-deployment checklist",
            "Obtain stakeholder sign-off",
        ],
    ),
    (
        "Deployment Actions (Next Week)",
        &[
            "Create production backup",
            "Deploy code to production server",
            "Configure custom domain rockinrockinboogie.com",
            "Verify deployment success",
        ],
    ),
    (
        "Post-Deployment Actions (Week After)",
        &[
            "Monitor error logs and performance",
            "Gather user feedback",
            "Verify analytics tracking",
            "Plan Phase 2 improvements",
        ],
    ),
];

pub const OVERALL_RISK: &str = "LOW ✅";

/// (risk, probability, impact, mitigation)
pub const RISKS: [(&str, &str, &str, &str); 4] = [
    ("Accessibility test failures", "Low", "High", "Comprehensive testing guide provided"),
    ("Deployment issues", "Very Low", "High", "Detailed deployment checklist and rollback plan"),
    ("Performance degradation", "Very Low", "Medium", "Performance benchmarks defined"),
    ("Security vulnerabilities", "Very Low", "High", "Security checklist completed"),
];

/// (bold lead, rest of the sentence)
pub const RECOMMENDATIONS: [(&str, &str); 5] = [
    (
        "Continue with deployment as planned",
        " - All accessibility improvements are complete and well-documented",
    ),
    (
        "Follow the testing procedures",
        " outlined in AUTOMATED_TESTING_REPORT.md before deployment",
    ),
    ("Complete the deployment checklist", " to ensure all prerequisites are met"),
    ("Monitor closely after deployment", " using the post-deployment monitoring guidelines"),
    ("Plan Phase 2 improvements", " based on user feedback and analytics data"),
];

pub const SUCCESS_CRITERIA: [&str; 10] = [
    "Site is accessible at rockinrockinboogie.com",
    "All pages load correctly",
    "All features work as expected",
    "No critical errors in logs",
    "Performance meets benchmarks",
    "WCAG Level AA compliance verified",
    "No security vulnerabilities",
    "Analytics tracking works",
    "Users can access content",
    "Mobile experience works",
];

pub const CONTACTS: [&str; 4] =
    ["Project Lead", "Technical Support", "Accessibility Lead", "Emergency Contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_counts() {
        assert_eq!(ACCESSIBILITY_FIXES.len(), 12);
        assert_eq!(WCAG_CRITERIA.len(), 10);
        assert_eq!(DOCUMENTATION.len(), 7);
    }

    #[test]
    fn test_every_deployment_phase_has_detail() {
        let schedule = crate::schedule::Schedule::deployment().unwrap();
        for phase in schedule.iter() {
            assert!(phase_detail(&phase.key).is_some(), "missing detail for {}", phase.key);
        }
        assert!(phase_detail("unknown").is_none());
    }
}
