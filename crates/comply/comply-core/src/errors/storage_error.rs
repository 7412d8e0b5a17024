//! Storage errors for the flat-file outputs and trend history.

use std::path::PathBuf;

use super::error_code::{self, ComplyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("trend history {path} is corrupt at row {row}: {message}")]
    CorruptTrend {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("could not lock {path}: {source}")]
    LockFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ComplyErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CorruptTrend { .. } => error_code::TREND_CORRUPT,
            Self::LockFailed { .. } => error_code::LOCK_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
