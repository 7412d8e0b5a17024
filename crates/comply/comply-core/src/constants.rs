//! Shared constants for the Comply scoring pipeline.

/// Comply version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status assigned to baseline controls that have no matching evidence.
pub const NOT_CHECKED_STATUS: &str = "Not Checked";

/// Normalized status value that earns a control its weight.
pub const COMPLIANT_STATUS: &str = "compliant";

/// Format used for trend timestamps (wall-clock, UTC).
pub const TREND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

// ---- Defaults ----

/// Default baseline catalog location, relative to the project root.
pub const DEFAULT_BASELINE_PATH: &str = "data/controls_baseline.csv";

/// Default evidence feed location, relative to the project root.
pub const DEFAULT_EVIDENCE_PATH: &str = "data/evidence.csv";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Default framework summary file name.
pub const DEFAULT_SUMMARY_FILE: &str = "framework_summary.csv";

/// Default trend history file name.
pub const DEFAULT_TREND_FILE: &str = "compliance_trend.csv";

/// Default report file stem; the extension follows the report format.
pub const DEFAULT_REPORT_STEM: &str = "compliance_report";

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "json";

/// Maximum merged control rows handed to a report renderer.
pub const DEFAULT_MAX_REPORT_ROWS: usize = 200;

/// Default duplicate-control policy.
pub const DEFAULT_DUPLICATE_CONTROLS: &str = "reject";

/// Number of points per window when classifying a trend.
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Percentage-point change needed before a trend counts as moving.
pub const TREND_DIRECTION_THRESHOLD: f64 = 2.0;

/// Report formats with a built-in reporter.
pub const REPORT_FORMATS: [&str; 2] = ["json", "console"];

// ---- Tabular headers ----

/// Framework summary output columns.
pub const SUMMARY_HEADERS: [&str; 5] = ["Framework", "Controls", "Compliant", "WeightTotal", "Pct"];

/// Trend output columns.
pub const TREND_HEADERS: [&str; 2] = ["Timestamp", "OverallCompliance"];

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "COMPLY_LOG";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "comply.toml";
