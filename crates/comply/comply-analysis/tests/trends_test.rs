//! Tests for trend accumulation and direction analysis.

use comply_analysis::trends::{append_trend, TrendAnalyzer};
use comply_core::types::{TrendDirection, TrendPoint, TrendSeries};

#[test]
fn test_append_to_empty_series() {
    let series = append_trend(TrendSeries::new(), "2026-10-19 08:00 UTC", 33.33);
    assert_eq!(series.len(), 1);
    assert_eq!(
        series.points()[0],
        TrendPoint::new("2026-10-19 08:00 UTC", 33.33)
    );
}

#[test]
fn test_append_keeps_prior_points() {
    let prior = TrendSeries::from_points(vec![
        TrendPoint::new("2026-10-17 08:00 UTC", 80.0),
        TrendPoint::new("2026-10-18 08:00 UTC", 82.5),
    ]);
    let next = append_trend(prior.clone(), "2026-10-19 08:00 UTC", 90.0);
    assert_eq!(next.len(), prior.len() + 1);
    assert_eq!(&next.points()[..2], prior.points());
    assert_eq!(next.last().unwrap().overall_pct, 90.0);
}

#[test]
fn test_classify_short_series_is_stable() {
    let analyzer = TrendAnalyzer::default();
    assert_eq!(analyzer.classify(&[]), TrendDirection::Stable);
    assert_eq!(analyzer.classify(&[50.0]), TrendDirection::Stable);
}

#[test]
fn test_classify_halves_for_short_series() {
    let analyzer = TrendAnalyzer::default();
    assert_eq!(analyzer.classify(&[50.0, 60.0]), TrendDirection::Improving);
    assert_eq!(analyzer.classify(&[60.0, 50.0]), TrendDirection::Declining);
    assert_eq!(analyzer.classify(&[50.0, 51.0]), TrendDirection::Stable);
}

#[test]
fn test_classify_uses_recent_windows() {
    let analyzer = TrendAnalyzer::new(3);
    // Early history is ignored once two full windows exist.
    let scores = [10.0, 10.0, 90.0, 90.0, 90.0, 80.0, 80.0, 80.0];
    assert_eq!(analyzer.classify(&scores), TrendDirection::Declining);
}

#[test]
fn test_delta_between_last_two_runs() {
    let analyzer = TrendAnalyzer::default();
    let one = TrendSeries::from_points(vec![TrendPoint::new("a", 50.0)]);
    assert_eq!(analyzer.delta(&one), None);

    let two = append_trend(one, "b", 47.25);
    assert_eq!(analyzer.delta(&two), Some(-2.75));
}
