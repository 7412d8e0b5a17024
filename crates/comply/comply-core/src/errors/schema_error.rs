//! Schema errors: the input table does not have the shape we need.

use super::error_code::{self, ComplyErrorCode};

/// Errors raised while mapping a tabular source onto typed records.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("{input}: required column '{column}' is missing")]
    MissingColumn { input: String, column: String },

    #[error("{input}: row {row}, column '{column}': invalid value '{value}' ({reason})")]
    InvalidValue {
        input: String,
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("{input}: row {row} has an empty control id")]
    EmptyControlId { input: String, row: usize },
}

impl ComplyErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
