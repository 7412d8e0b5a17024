//! Top-level Comply configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DuplicateControlPolicy, InputsConfig, IntegrityConfig, OutputConfig, TrendConfig};
use crate::constants::{PROJECT_CONFIG_FILE, REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`COMPLY_*`)
/// 3. Project config (`comply.toml` in project root)
/// 4. User config (`~/.comply/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplyConfig {
    pub inputs: InputsConfig,
    pub integrity: IntegrityConfig,
    pub output: OutputConfig,
    pub trend: TrendConfig,
}

/// Override arguments supplied by whatever wraps the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub baseline_path: Option<PathBuf>,
    pub evidence_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub report_format: Option<String>,
    pub duplicate_controls: Option<String>,
}

impl ComplyConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ComplyConfig) -> Result<(), ConfigError> {
        if let Some(ref policy) = config.integrity.duplicate_controls {
            policy.parse::<DuplicateControlPolicy>()?;
        }
        if let Some(ref format) = config.output.report_format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "output.report_format".to_string(),
                    message: format!("must be one of {REPORT_FORMATS:?}"),
                });
            }
        }
        if config.output.max_report_rows == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "output.max_report_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, name) in [
            ("output.summary_file", &config.output.summary_file),
            ("output.trend_file", &config.output.trend_file),
            ("output.report_file", &config.output.report_file),
        ] {
            if matches!(name, Some(n) if n.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(window) = config.trend.window {
            if window < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "trend.window".to_string(),
                    message: "must be at least 2".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.comply/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".comply").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ComplyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ComplyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ComplyConfig, other: &ComplyConfig) {
        // Inputs
        if other.inputs.baseline_path.is_some() {
            base.inputs.baseline_path = other.inputs.baseline_path.clone();
        }
        if other.inputs.evidence_path.is_some() {
            base.inputs.evidence_path = other.inputs.evidence_path.clone();
        }

        // Integrity
        if other.integrity.duplicate_controls.is_some() {
            base.integrity.duplicate_controls = other.integrity.duplicate_controls.clone();
        }

        // Output
        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
        if other.output.summary_file.is_some() {
            base.output.summary_file = other.output.summary_file.clone();
        }
        if other.output.trend_file.is_some() {
            base.output.trend_file = other.output.trend_file.clone();
        }
        if other.output.report_file.is_some() {
            base.output.report_file = other.output.report_file.clone();
        }
        if other.output.report_format.is_some() {
            base.output.report_format = other.output.report_format.clone();
        }
        if other.output.max_report_rows.is_some() {
            base.output.max_report_rows = other.output.max_report_rows;
        }

        // Trend
        if other.trend.window.is_some() {
            base.trend.window = other.trend.window;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COMPLY_BASELINE_PATH`, `COMPLY_OUTPUT_DIR`, etc.
    fn apply_env_overrides(config: &mut ComplyConfig) {
        if let Ok(val) = std::env::var("COMPLY_BASELINE_PATH") {
            config.inputs.baseline_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COMPLY_EVIDENCE_PATH") {
            config.inputs.evidence_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COMPLY_OUTPUT_DIR") {
            config.output.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COMPLY_REPORT_FORMAT") {
            config.output.report_format = Some(val);
        }
        if let Ok(val) = std::env::var("COMPLY_MAX_REPORT_ROWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.output.max_report_rows = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMPLY_DUPLICATE_CONTROLS") {
            config.integrity.duplicate_controls = Some(val);
        }
        if let Ok(val) = std::env::var("COMPLY_TREND_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.trend.window = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut ComplyConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.baseline_path {
            config.inputs.baseline_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.evidence_path {
            config.inputs.evidence_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.output_dir {
            config.output.dir = Some(v.clone());
        }
        if let Some(ref v) = overrides.report_format {
            config.output.report_format = Some(v.clone());
        }
        if let Some(ref v) = overrides.duplicate_controls {
            config.integrity.duplicate_controls = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
