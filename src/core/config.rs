//! Runtime configuration.
//!
//! Everything the report needs is compiled in. `Config` gathers it in one
//! immutable value built at startup; the command line may only move the
//! output directory.

use std::path::PathBuf;

/// Default directory reports are written to, relative to the working directory.
pub const DEFAULT_REPORT_DIR: &str = "STATUS_REPORTS";

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the report file is written to
    pub output_dir: PathBuf,

    /// Short title used in the document heading and console banner
    pub title: String,

    /// Full project name shown in the report header
    pub project_name: String,
}

impl Config {
    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            title: "Rockin' Rockin' Boogie".to_string(),
            project_name: "Rockin' Rockin' Boogie - A Legacy Restored".to_string(),
        }
    }
}
