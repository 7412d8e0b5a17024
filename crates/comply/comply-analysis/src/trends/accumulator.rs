//! Append-only trend accumulation.

use comply_core::types::{TrendPoint, TrendSeries};

/// Append the current run to `series`. Existing points are never touched;
/// an empty series becomes a one-element series.
///
/// The timestamp is supplied by the caller (see
/// [`comply_core::types::trend_timestamp`]) so runs are reproducible.
pub fn append_trend(
    mut series: TrendSeries,
    timestamp: impl Into<String>,
    overall_pct: f64,
) -> TrendSeries {
    series.push(TrendPoint::new(timestamp, overall_pct));
    series
}
