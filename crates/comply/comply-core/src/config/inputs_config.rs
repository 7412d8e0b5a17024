//! Input source configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASELINE_PATH, DEFAULT_EVIDENCE_PATH};

/// Where the baseline catalog and evidence feed live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputsConfig {
    /// Baseline CSV. Default: `data/controls_baseline.csv`.
    pub baseline_path: Option<PathBuf>,
    /// Evidence CSV; may not exist. Default: `data/evidence.csv`.
    pub evidence_path: Option<PathBuf>,
}

impl InputsConfig {
    /// Baseline path resolved against `root` when relative.
    pub fn effective_baseline_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.baseline_path.as_deref(), DEFAULT_BASELINE_PATH)
    }

    /// Evidence path resolved against `root` when relative.
    pub fn effective_evidence_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.evidence_path.as_deref(), DEFAULT_EVIDENCE_PATH)
    }
}

pub(crate) fn resolve(root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| Path::new(default));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
