//! JSON reporter — the machine-readable snapshot handed to renderers.

use comply_core::errors::ReportError;

use super::{ReportSnapshot, Reporter};

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, snapshot: &ReportSnapshot) -> Result<String, ReportError> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
