//! Reporters — output formats for a scoring run.
//!
//! Each reporter renders the same [`ReportSnapshot`]. Charts and HTML live
//! outside this crate; they consume the JSON form.

pub mod console;
pub mod json;
pub mod snapshot;

pub use snapshot::ReportSnapshot;

use comply_core::errors::ReportError;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, snapshot: &ReportSnapshot) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter::new(false))),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "console"]
}
