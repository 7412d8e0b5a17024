//! Framework summary table: `Framework, Controls, Compliant, WeightTotal, Pct`.

use std::path::Path;

use comply_core::constants::SUMMARY_HEADERS;
use comply_core::errors::StorageError;
use comply_core::types::FrameworkSummary;

use crate::atomic::write_atomic;

/// Render summaries as CSV, one row per framework in the given order.
pub fn render_framework_summary(frameworks: &[FrameworkSummary]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SUMMARY_HEADERS)?;
    for f in frameworks {
        writer.write_record([
            f.framework.clone(),
            f.control_count.to_string(),
            f.compliant_count.to_string(),
            f.weight_total.to_string(),
            f.pct.to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Overwrite the summary file at `path`.
pub fn write_framework_summary(
    path: &Path,
    frameworks: &[FrameworkSummary],
) -> Result<(), StorageError> {
    let bytes = render_framework_summary(frameworks).map_err(|e| StorageError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_atomic(path, &bytes)?;
    tracing::info!(path = %path.display(), frameworks = frameworks.len(), "wrote framework summary");
    Ok(())
}
