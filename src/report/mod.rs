//! Status report generation.
//!
//! - [`ReportRenderer`] turns a schedule and an instant into markdown
//! - [`ReportWriter`] stores the markdown under a date-stamped file name
//! - [`ProgressSummary`] is the short form printed to the console

pub mod content;
mod render;
mod summary;
mod writer;

use std::path::PathBuf;

use chrono::NaiveDateTime;

pub use render::ReportRenderer;
pub use summary::{PhaseSummary, ProgressSummary};
pub use writer::ReportWriter;

use crate::core::{Config, ReportResult};
use crate::schedule::Schedule;

/// Render the report for `now` and write it under `config.output_dir`.
pub fn generate(schedule: &Schedule, config: &Config, now: NaiveDateTime) -> ReportResult<PathBuf> {
    let report = ReportRenderer::new(schedule, config).render(now);
    ReportWriter::new(&config.output_dir).write(&report, now)
}
