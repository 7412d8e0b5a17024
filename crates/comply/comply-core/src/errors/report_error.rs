//! Report rendering errors.

use super::error_code::{self, ComplyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    Serialization(String),

    #[error("unknown report format: {0}")]
    UnknownFormat(String),
}

impl ComplyErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
