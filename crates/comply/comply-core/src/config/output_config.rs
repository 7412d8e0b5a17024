//! Output file configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::inputs_config::resolve;
use crate::constants::{
    DEFAULT_MAX_REPORT_ROWS, DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_FORMAT, DEFAULT_REPORT_STEM,
    DEFAULT_SUMMARY_FILE, DEFAULT_TREND_FILE,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Default: `reports`.
    pub dir: Option<PathBuf>,
    /// Framework summary file name. Default: `framework_summary.csv`.
    pub summary_file: Option<String>,
    /// Trend history file name. Default: `compliance_trend.csv`.
    pub trend_file: Option<String>,
    /// Report file name. Default: `compliance_report.<ext>` for the format.
    pub report_file: Option<String>,
    /// "json" | "console". Default: "json".
    pub report_format: Option<String>,
    /// Merged control rows handed to the reporter. Default: 200.
    pub max_report_rows: Option<usize>,
}

impl OutputConfig {
    pub fn effective_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.dir.as_deref(), DEFAULT_OUTPUT_DIR)
    }

    pub fn effective_summary_path(&self, root: &Path) -> PathBuf {
        self.effective_dir(root)
            .join(self.summary_file.as_deref().unwrap_or(DEFAULT_SUMMARY_FILE))
    }

    pub fn effective_trend_path(&self, root: &Path) -> PathBuf {
        self.effective_dir(root)
            .join(self.trend_file.as_deref().unwrap_or(DEFAULT_TREND_FILE))
    }

    pub fn effective_report_path(&self, root: &Path) -> PathBuf {
        let name = match self.report_file {
            Some(ref name) => name.clone(),
            None => {
                let ext = match self.effective_report_format() {
                    "console" => "txt",
                    _ => "json",
                };
                format!("{DEFAULT_REPORT_STEM}.{ext}")
            }
        };
        self.effective_dir(root).join(name)
    }

    pub fn effective_report_format(&self) -> &str {
        self.report_format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn effective_max_report_rows(&self) -> usize {
        self.max_report_rows.unwrap_or(DEFAULT_MAX_REPORT_ROWS)
    }
}
