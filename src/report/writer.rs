//! Persisting rendered reports.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::core::{ReportError, ReportResult};

/// Writes rendered reports into a directory, one file per calendar day.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// `status_report_2026_02_01_Sunday.md`
    pub fn file_name(now: NaiveDateTime) -> String {
        format!("status_report_{}.md", now.format("%Y_%m_%d_%A"))
    }

    /// Full path the report for `now` is written to.
    pub fn report_path(&self, now: NaiveDateTime) -> PathBuf {
        self.output_dir.join(Self::file_name(now))
    }

    /// Write `content` as the report for `now` and return its path.
    ///
    /// Creates the output directory (and parents) if missing. A report
    /// already written for the same day is replaced.
    pub fn write(&self, content: &str, now: NaiveDateTime) -> ReportResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.report_path(now);
        if path.exists() {
            tracing::debug!(path = ?path, "Replacing existing report");
        }

        fs::write(&path, content)
            .map_err(|source| ReportError::Write { path: path.clone(), source })?;

        tracing::info!(path = ?path, bytes = content.len(), "Report written");
        Ok(path)
    }
}
