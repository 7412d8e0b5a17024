//! The data snapshot every reporter renders.

use serde::{Deserialize, Serialize};

use comply_core::types::{
    DataIntegrityWarning, FrameworkSummary, MergedControl, Reconciliation, ScoreReport,
    TrendDirection, TrendSeries,
};

use crate::trends::TrendAnalyzer;

/// A complete, self-consistent view of one run.
///
/// `controls` holds at most `max_rows` merged rows in baseline order;
/// `total_controls` and `compliant_controls` always cover the full set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub generated_at: String,
    pub overall_pct: f64,
    pub frameworks: Vec<FrameworkSummary>,
    pub total_controls: usize,
    pub compliant_controls: usize,
    pub controls: Vec<MergedControl>,
    pub truncated: bool,
    pub warnings: Vec<DataIntegrityWarning>,
    pub trend: TrendSeries,
    pub trend_direction: TrendDirection,
    pub trend_delta: Option<f64>,
}

impl ReportSnapshot {
    pub fn build(
        generated_at: impl Into<String>,
        reconciliation: &Reconciliation,
        score: &ScoreReport,
        trend: &TrendSeries,
        analyzer: &TrendAnalyzer,
        max_rows: usize,
    ) -> Self {
        let all = &reconciliation.controls;
        Self {
            generated_at: generated_at.into(),
            overall_pct: score.overall_pct,
            frameworks: score.frameworks.clone(),
            total_controls: all.len(),
            compliant_controls: all.iter().filter(|c| c.compliant_flag == 1).count(),
            controls: all.iter().take(max_rows).cloned().collect(),
            truncated: all.len() > max_rows,
            warnings: reconciliation.warnings.clone(),
            trend: trend.clone(),
            trend_direction: analyzer.classify_series(trend),
            trend_delta: analyzer.delta(trend),
        }
    }
}
