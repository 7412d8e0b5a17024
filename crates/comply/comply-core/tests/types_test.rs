//! Tests for the Comply data model.

use chrono::{TimeZone, Utc};
use comply_core::types::*;

#[test]
fn test_actual_value_from_cell() {
    assert_eq!(ActualValue::from_cell(""), None);
    assert_eq!(ActualValue::from_cell("   "), None);
    assert_eq!(ActualValue::from_cell("95"), Some(ActualValue::Number(95.0)));
    assert_eq!(ActualValue::from_cell(" 0.5 "), Some(ActualValue::Number(0.5)));
    assert_eq!(
        ActualValue::from_cell("TLS 1.2"),
        Some(ActualValue::Text("TLS 1.2".to_string()))
    );
    // "NaN" parses as f64 but is not a usable observation.
    assert_eq!(
        ActualValue::from_cell("NaN"),
        Some(ActualValue::Text("NaN".to_string()))
    );
}

#[test]
fn test_actual_value_serializes_untagged() {
    let json = serde_json::to_string(&vec![
        Some(ActualValue::Number(3.5)),
        Some(ActualValue::Text("on".into())),
        None,
    ])
    .unwrap();
    assert_eq!(json, r#"[3.5,"on",null]"#);
}

#[test]
fn test_trend_series_append_only() {
    let mut series = TrendSeries::new();
    assert!(series.is_empty());
    series.push(TrendPoint::new("2026-01-01 00:00 UTC", 50.0));
    series.push(TrendPoint::new("2026-01-02 00:00 UTC", 60.0));
    assert_eq!(series.len(), 2);
    assert_eq!(series.values(), vec![50.0, 60.0]);
    assert_eq!(series.last().unwrap().overall_pct, 60.0);
}

#[test]
fn test_trend_timestamp_format() {
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 7, 5, 42).unwrap();
    assert_eq!(trend_timestamp(at), "2026-10-19 07:05 UTC");
}

#[test]
fn test_merged_control_json_is_camel_case() {
    let merged = MergedControl {
        id: "C1".into(),
        framework: "SOX".into(),
        weight: 10.0,
        actual_value: None,
        status: "Compliant".into(),
        compliant_flag: 1,
        score: 10.0,
    };
    let value = serde_json::to_value(&merged).unwrap();
    assert_eq!(value["compliantFlag"], 1);
    assert!(value["actualValue"].is_null());
}

#[test]
fn test_integrity_warning_display() {
    let w = DataIntegrityWarning::MultipleEvidence {
        id: "C7".into(),
        count: 3,
    };
    assert!(w.to_string().contains("C7"));
    assert!(w.to_string().contains("last one wins"));
}
