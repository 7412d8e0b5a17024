//! End-to-end tests for a scoring run.

use std::path::Path;

use chrono::{TimeZone, Utc};
use comply_core::config::ComplyConfig;
use comply_core::errors::{ComplyErrorCode, PipelineError};
use comply_core::types::TrendDirection;
use comply_pipeline::run_at;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "data/controls_baseline.csv",
        "Control ID,Framework,Weight\nC1,SOX,10\nC2,SOX,20\nC3,PCI,5\n",
    );
    write(
        dir.path(),
        "data/evidence.csv",
        "ControlID,ActualValue,Status\nC1,enabled,Compliant\nC3,TLS 1.0,Non-Compliant\nC9,x,Compliant\n",
    );
    dir
}

fn at(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, 8, 0, 0).unwrap()
}

#[test]
fn test_full_run_writes_all_outputs() {
    let dir = project();
    let config = ComplyConfig::default();

    let outcome = run_at(dir.path(), &config, at(19)).unwrap();

    assert_eq!(outcome.timestamp, "2026-10-19 08:00 UTC");
    // 10 of 35 weight compliant.
    assert_eq!(outcome.overall_pct, 28.57);
    assert_eq!(outcome.frameworks.len(), 2);
    assert_eq!(outcome.frameworks[0].pct, 33.33);
    assert_eq!(outcome.frameworks[1].pct, 0.0);
    assert_eq!(outcome.warnings.len(), 1, "C9 is orphan evidence");
    assert_eq!(outcome.trend_points, 1);

    let summary = std::fs::read_to_string(&outcome.summary_path).unwrap();
    assert_eq!(
        summary,
        "Framework,Controls,Compliant,WeightTotal,Pct\nSOX,2,1,30,33.33\nPCI,1,0,5,0\n"
    );

    let trend = std::fs::read_to_string(&outcome.trend_path).unwrap();
    assert_eq!(trend, "Timestamp,OverallCompliance\n2026-10-19 08:00 UTC,28.57\n");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outcome.report_path).unwrap()).unwrap();
    assert_eq!(report["overallPct"], 28.57);
    assert_eq!(report["controls"].as_array().unwrap().len(), 3);
    assert_eq!(report["controls"][1]["status"], "Not Checked");
    assert_eq!(report["controls"][0]["actualValue"], "enabled");
}

#[test]
fn test_repeated_runs_grow_trend() {
    let dir = project();
    let config = ComplyConfig::default();

    run_at(dir.path(), &config, at(17)).unwrap();
    run_at(dir.path(), &config, at(18)).unwrap();

    write(
        dir.path(),
        "data/evidence.csv",
        "Control ID,Status\nC1,Compliant\nC2,Compliant\nC3,Compliant\n",
    );
    let outcome = run_at(dir.path(), &config, at(19)).unwrap();

    assert_eq!(outcome.overall_pct, 100.0);
    assert_eq!(outcome.trend_points, 3);
    assert_eq!(outcome.trend_direction, TrendDirection::Improving);

    let trend = std::fs::read_to_string(&outcome.trend_path).unwrap();
    let lines: Vec<&str> = trend.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2026-10-17 08:00 UTC,28.57");
    assert_eq!(lines[3], "2026-10-19 08:00 UTC,100");
}

#[test]
fn test_missing_evidence_scores_zero() {
    let dir = project();
    std::fs::remove_file(dir.path().join("data/evidence.csv")).unwrap();

    let outcome = run_at(dir.path(), &ComplyConfig::default(), at(19)).unwrap();
    assert_eq!(outcome.overall_pct, 0.0);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_schema_error_writes_nothing() {
    let dir = project();
    let config = ComplyConfig::default();
    run_at(dir.path(), &config, at(18)).unwrap();

    let reports = dir.path().join("reports");
    let trend_before = std::fs::read(reports.join("compliance_trend.csv")).unwrap();
    let summary_before = std::fs::read(reports.join("framework_summary.csv")).unwrap();
    let report_before = std::fs::read(reports.join("compliance_report.json")).unwrap();

    write(dir.path(), "data/evidence.csv", "Control ID,Outcome\nC1,Compliant\n");
    let err = run_at(dir.path(), &config, at(19)).unwrap_err();
    assert!(matches!(err, PipelineError::Load(_)));
    assert_eq!(err.error_code(), "SCHEMA_ERROR");
    assert!(err.to_string().contains("Status"));

    assert_eq!(std::fs::read(reports.join("compliance_trend.csv")).unwrap(), trend_before);
    assert_eq!(std::fs::read(reports.join("framework_summary.csv")).unwrap(), summary_before);
    assert_eq!(std::fs::read(reports.join("compliance_report.json")).unwrap(), report_before);
}

#[test]
fn test_duplicate_controls_rejected_before_output() {
    let dir = project();
    write(
        dir.path(),
        "data/controls_baseline.csv",
        "Control ID,Framework,Weight\nC1,SOX,10\nC1,SOX,20\n",
    );
    let err = run_at(dir.path(), &ComplyConfig::default(), at(19)).unwrap_err();
    assert!(matches!(err, PipelineError::Integrity(_)));
    assert!(!dir.path().join("reports").exists());
}

#[test]
fn test_duplicate_controls_tolerated_when_configured() {
    let dir = project();
    write(
        dir.path(),
        "data/controls_baseline.csv",
        "Control ID,Framework,Weight\nC1,SOX,10\nC1,SOX,20\n",
    );
    let config = ComplyConfig::from_toml("[integrity]\nduplicate_controls = \"warn\"").unwrap();
    let outcome = run_at(dir.path(), &config, at(19)).unwrap();
    assert_eq!(outcome.overall_pct, 100.0);
    assert_eq!(outcome.frameworks[0].control_count, 2);
}

#[test]
fn test_corrupt_trend_aborts_without_writing() {
    let dir = project();
    write(dir.path(), "reports/compliance_trend.csv", "Timestamp,OverallCompliance\nt1,high\n");

    let err = run_at(dir.path(), &ComplyConfig::default(), at(19)).unwrap_err();
    assert_eq!(err.error_code(), "TREND_CORRUPT");
    assert!(!dir.path().join("reports/framework_summary.csv").exists());
    assert!(!dir.path().join("reports/compliance_report.json").exists());
}

#[test]
fn test_console_report_and_row_cap() {
    let dir = project();
    let config = ComplyConfig::from_toml(
        "[output]\nreport_format = \"console\"\nmax_report_rows = 1\ndir = \"out\"",
    )
    .unwrap();
    let outcome = run_at(dir.path(), &config, at(19)).unwrap();
    assert_eq!(outcome.report_path, dir.path().join("out/compliance_report.txt"));

    let text = std::fs::read_to_string(&outcome.report_path).unwrap();
    assert!(text.contains("Overall Compliance: 28.57%"));
    assert!(text.contains("2 more controls not shown"));
}

#[test]
fn test_missing_baseline_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = run_at(dir.path(), &ComplyConfig::default(), at(19)).unwrap_err();
    assert_eq!(err.error_code(), "INPUT_ERROR");
}
