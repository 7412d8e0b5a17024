//! Error handling for Comply.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod integrity_error;
pub mod load_error;
pub mod pipeline_error;
pub mod report_error;
pub mod schema_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ComplyErrorCode;
pub use input_error::InputError;
pub use integrity_error::IntegrityError;
pub use load_error::LoadError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use schema_error::SchemaError;
pub use storage_error::StorageError;
