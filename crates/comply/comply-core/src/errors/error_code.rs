//! ComplyErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers (schedulers, wrappers that
/// parse stderr) get a structured code alongside the human message.
pub trait ComplyErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const INTEGRITY_ERROR: &str = "INTEGRITY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const TREND_CORRUPT: &str = "TREND_CORRUPT";
pub const LOCK_FAILED: &str = "LOCK_FAILED";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
