//! Data-integrity policy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DUPLICATE_CONTROLS;
use crate::errors::ConfigError;

/// What to do when the baseline repeats a control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateControlPolicy {
    /// Abort the run.
    #[default]
    Reject,
    /// Keep every row and record a warning.
    Warn,
}

impl FromStr for DuplicateControlPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "warn" => Ok(Self::Warn),
            other => Err(ConfigError::InvalidValue {
                field: "integrity.duplicate_controls".to_string(),
                message: format!("expected 'reject' or 'warn', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for DuplicateControlPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Warn => f.write_str("warn"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntegrityConfig {
    /// "reject" | "warn". Default: "reject".
    pub duplicate_controls: Option<String>,
}

impl IntegrityConfig {
    /// Parsed duplicate-control policy. Invalid values are caught by
    /// `ComplyConfig::validate`; this falls back to the default.
    pub fn effective_duplicate_controls(&self) -> DuplicateControlPolicy {
        self.duplicate_controls
            .as_deref()
            .unwrap_or(DEFAULT_DUPLICATE_CONTROLS)
            .parse()
            .unwrap_or_default()
    }
}
