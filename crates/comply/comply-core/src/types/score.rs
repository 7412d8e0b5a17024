//! Aggregated score output.

use serde::{Deserialize, Serialize};

/// Compliance roll-up for one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSummary {
    pub framework: String,
    pub control_count: usize,
    pub compliant_count: usize,
    pub weight_total: f64,
    /// Weighted compliance percentage, 0-100, two decimals.
    pub pct: f64,
}

/// Overall percentage plus the per-framework breakdown in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_pct: f64,
    pub frameworks: Vec<FrameworkSummary>,
}

impl ScoreReport {
    pub fn framework(&self, name: &str) -> Option<&FrameworkSummary> {
        self.frameworks.iter().find(|f| f.framework == name)
    }
}
