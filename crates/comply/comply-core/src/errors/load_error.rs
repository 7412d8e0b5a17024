//! Loader errors: anything that stops a baseline or evidence load.

use super::error_code::ComplyErrorCode;
use super::{InputError, SchemaError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

impl ComplyErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Schema(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
        }
    }
}
