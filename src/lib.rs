//! # status-report
//!
//! Weekly deployment status report generator for Rockin' Rockin' Boogie.
//!
//! The deployment schedule is a fixed list of phases. Each run classifies
//! every phase against the current date, renders a markdown report and writes
//! it to `STATUS_REPORTS/status_report_<YYYY>_<MM>_<DD>_<Weekday>.md`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate today's report
//! status-report
//!
//! # Preview the report as of a given date without writing it
//! status-report --as-of 2026-02-01 --dry-run
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use status_report::{Config, ReportRenderer, ReportWriter, Schedule};
//!
//! let schedule = Schedule::deployment()?;
//! let config = Config::default();
//! let now = chrono::Local::now().naive_local();
//!
//! let markdown = ReportRenderer::new(&schedule, &config).render(now);
//! let path = ReportWriter::new(&config.output_dir).write(&markdown, now)?;
//! println!("{}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::format_push_string)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod core;
pub mod report;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{Config, ReportError, ReportResult};
pub use report::{generate, ProgressSummary, ReportRenderer, ReportWriter};
pub use schedule::{classify, Phase, PhaseProgress, PhaseStatus, Schedule, ScheduleError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "status-report";
