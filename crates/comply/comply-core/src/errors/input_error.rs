//! Input errors: the source could not be read at all.

use std::path::PathBuf;

use super::error_code::{self, ComplyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV in {input}: {message}")]
    Csv { input: String, message: String },
}

impl ComplyErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
