//! Tests for the Comply configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use comply_core::config::{ComplyConfig, ConfigOverrides, DuplicateControlPolicy};
use comply_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all COMPLY_ env vars to prevent cross-test contamination.
fn clear_comply_env_vars() {
    for key in [
        "COMPLY_BASELINE_PATH",
        "COMPLY_EVIDENCE_PATH",
        "COMPLY_OUTPUT_DIR",
        "COMPLY_REPORT_FORMAT",
        "COMPLY_MAX_REPORT_ROWS",
        "COMPLY_DUPLICATE_CONTROLS",
        "COMPLY_TREND_WINDOW",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comply_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("comply.toml"),
        r#"
[inputs]
baseline_path = "catalog/baseline.csv"

[output]
dir = "out"
max_report_rows = 50
"#,
    )
    .unwrap();

    std::env::set_var("COMPLY_OUTPUT_DIR", "env-out");
    std::env::set_var("COMPLY_MAX_REPORT_ROWS", "75");

    let overrides = ConfigOverrides {
        output_dir: Some(PathBuf::from("cli-out")),
        ..Default::default()
    };

    let config = ComplyConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat env, env beats project.
    assert_eq!(config.output.dir, Some(PathBuf::from("cli-out")));
    assert_eq!(config.output.max_report_rows, Some(75));
    // Project value survives where nothing overrides it.
    assert_eq!(
        config.inputs.effective_baseline_path(dir.path()),
        dir.path().join("catalog/baseline.csv")
    );

    clear_comply_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comply_env_vars();

    let dir = tempdir();
    let config = ComplyConfig::load(dir.path(), None).unwrap();

    assert_eq!(
        config.inputs.effective_baseline_path(dir.path()),
        dir.path().join("data/controls_baseline.csv")
    );
    assert_eq!(
        config.inputs.effective_evidence_path(dir.path()),
        dir.path().join("data/evidence.csv")
    );
    assert_eq!(
        config.output.effective_trend_path(dir.path()),
        dir.path().join("reports/compliance_trend.csv")
    );
    assert_eq!(
        config.output.effective_summary_path(dir.path()),
        dir.path().join("reports/framework_summary.csv")
    );
    assert_eq!(
        config.output.effective_report_path(dir.path()),
        dir.path().join("reports/compliance_report.json")
    );
    assert_eq!(config.output.effective_max_report_rows(), 200);
    assert_eq!(config.trend.effective_window(), 7);
    assert_eq!(
        config.integrity.effective_duplicate_controls(),
        DuplicateControlPolicy::Reject
    );
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comply_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("comply.toml"), "[output\ndir = ").unwrap();

    let err = ComplyConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = ComplyConfig::from_toml(
        r#"
[output]
report_format = "console"
colour = "blue"

[future_section]
anything = 1
"#,
    )
    .unwrap();
    assert_eq!(config.output.effective_report_format(), "console");
    assert_eq!(
        config.output.effective_report_path(std::path::Path::new("/p")),
        PathBuf::from("/p/reports/compliance_report.txt")
    );
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        "[output]\nreport_format = \"html\"",
        "[output]\nmax_report_rows = 0",
        "[output]\ntrend_file = \"  \"",
        "[integrity]\nduplicate_controls = \"ignore\"",
        "[trend]\nwindow = 1",
    ];
    for case in cases {
        let config = ComplyConfig::from_toml(case).unwrap();
        assert!(
            ComplyConfig::validate(&config).is_err(),
            "expected validation failure for {case:?}"
        );
    }
}

#[test]
fn test_env_duplicate_policy_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_comply_env_vars();

    let dir = tempdir();
    std::env::set_var("COMPLY_DUPLICATE_CONTROLS", "warn");
    let config = ComplyConfig::load(dir.path(), None).unwrap();
    assert_eq!(
        config.integrity.effective_duplicate_controls(),
        DuplicateControlPolicy::Warn
    );

    std::env::set_var("COMPLY_DUPLICATE_CONTROLS", "sometimes");
    assert!(ComplyConfig::load(dir.path(), None).is_err());

    clear_comply_env_vars();
}

#[test]
fn test_absolute_paths_are_not_rebased() {
    let config = ComplyConfig::from_toml("[inputs]\nevidence_path = \"/srv/feeds/evidence.csv\"").unwrap();
    assert_eq!(
        config.inputs.effective_evidence_path(std::path::Path::new("/project")),
        PathBuf::from("/srv/feeds/evidence.csv")
    );
}

#[test]
fn test_toml_round_trip_keeps_values() {
    let config = ComplyConfig::from_toml("[output]\nmax_report_rows = 25\n[trend]\nwindow = 3").unwrap();
    let text = config.to_toml().unwrap();
    let back = ComplyConfig::from_toml(&text).unwrap();
    assert_eq!(back.output.max_report_rows, Some(25));
    assert_eq!(back.trend.window, Some(3));
}
