//! Report generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("Failed to create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written.
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_errors_keep_path_and_source() {
        let err = ReportError::Write {
            path: PathBuf::from("STATUS_REPORTS/status_report_2026_02_01_Sunday.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.to_string(),
            "Failed to write report STATUS_REPORTS/status_report_2026_02_01_Sunday.md: denied"
        );
        assert!(err.source().is_some());
    }
}
