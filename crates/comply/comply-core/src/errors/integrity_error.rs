//! Integrity errors: data-integrity warnings escalated to hard failures.

use super::error_code::{self, ComplyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error("control id '{id}' appears {occurrences} times in the baseline")]
    DuplicateControlId { id: String, occurrences: usize },
}

impl ComplyErrorCode for IntegrityError {
    fn error_code(&self) -> &'static str {
        error_code::INTEGRITY_ERROR
    }
}
