//! Core types shared by the report pipeline: configuration and errors.

mod config;
mod error;

pub use config::{Config, DEFAULT_REPORT_DIR};
pub use error::{ReportError, ReportResult};
