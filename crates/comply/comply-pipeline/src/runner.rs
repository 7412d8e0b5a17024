//! Pipeline runner.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use comply_analysis::loaders::{load_baseline, load_evidence};
use comply_analysis::reconcile::Reconciler;
use comply_analysis::reporters::{create_reporter, ReportSnapshot};
use comply_analysis::scoring::Scorer;
use comply_analysis::trends::{append_trend, TrendAnalyzer};
use comply_core::config::ComplyConfig;
use comply_core::errors::{PipelineError, ReportError};
use comply_core::types::{trend_timestamp, DataIntegrityWarning, FrameworkSummary, TrendDirection};
use comply_storage::{write_atomic, write_framework_summary, TrendStore};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub timestamp: String,
    pub overall_pct: f64,
    pub frameworks: Vec<FrameworkSummary>,
    pub warnings: Vec<DataIntegrityWarning>,
    pub trend_points: usize,
    pub trend_direction: TrendDirection,
    pub summary_path: PathBuf,
    pub trend_path: PathBuf,
    pub report_path: PathBuf,
}

/// Run the pipeline stamped with the current wall-clock time.
pub fn run(root: &Path, config: &ComplyConfig) -> Result<RunOutcome, PipelineError> {
    run_at(root, config, Utc::now())
}

/// Run the pipeline stamped with `now`.
///
/// Loader, integrity, and trend-history errors abort before any output is
/// written. Outputs are written summary → report → trend, each atomically,
/// while the trend lock is held.
pub fn run_at(
    root: &Path,
    config: &ComplyConfig,
    now: DateTime<Utc>,
) -> Result<RunOutcome, PipelineError> {
    let _span = tracing::info_span!("comply_run", root = %root.display()).entered();

    ComplyConfig::validate(config)?;
    let format = config.output.effective_report_format();
    let reporter =
        create_reporter(format).ok_or_else(|| ReportError::UnknownFormat(format.to_string()))?;

    let baseline_path = config.inputs.effective_baseline_path(root);
    let evidence_path = config.inputs.effective_evidence_path(root);
    let summary_path = config.output.effective_summary_path(root);
    let trend_path = config.output.effective_trend_path(root);
    let report_path = config.output.effective_report_path(root);

    let baseline = load_baseline(&baseline_path)?;
    let evidence = load_evidence(&evidence_path)?;

    let reconciliation =
        Reconciler::new(config.integrity.effective_duplicate_controls()).merge(&baseline, &evidence)?;
    let score = Scorer::new().score(&reconciliation.controls);
    tracing::info!(
        overall_pct = score.overall_pct,
        frameworks = score.frameworks.len(),
        warnings = reconciliation.warnings.len(),
        "scored controls"
    );

    let timestamp = trend_timestamp(now);
    let analyzer = TrendAnalyzer::new(config.trend.effective_window());
    let max_rows = config.output.effective_max_report_rows();

    let store = TrendStore::new(&trend_path);
    let (trend_points, trend_direction) = store.transact(|history| {
        let series = append_trend(history, timestamp.clone(), score.overall_pct);
        let snapshot = ReportSnapshot::build(
            timestamp.clone(),
            &reconciliation,
            &score,
            &series,
            &analyzer,
            max_rows,
        );
        let rendered = reporter.generate(&snapshot)?;

        write_framework_summary(&summary_path, &score.frameworks)?;
        write_atomic(&report_path, rendered.as_bytes())?;
        tracing::info!(path = %report_path.display(), format = reporter.name(), "wrote report");

        let outcome = (series.len(), snapshot.trend_direction);
        Ok::<_, PipelineError>((series, outcome))
    })?;

    Ok(RunOutcome {
        timestamp,
        overall_pct: score.overall_pct,
        frameworks: score.frameworks,
        warnings: reconciliation.warnings,
        trend_points,
        trend_direction,
        summary_path,
        trend_path,
        report_path,
    })
}
