//! Historical trend of overall compliance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TREND_TIMESTAMP_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub timestamp: String,
    pub overall_pct: f64,
}

impl TrendPoint {
    pub fn new(timestamp: impl Into<String>, overall_pct: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            overall_pct,
        }
    }
}

/// Ordered, append-only series of trend points.
///
/// Points can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: TrendPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&TrendPoint> {
        self.points.last()
    }

    /// Overall percentages in series order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.overall_pct).collect()
    }
}

/// Direction of the overall score across recent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

/// Format a wall-clock instant the way trend files store it.
pub fn trend_timestamp(at: DateTime<Utc>) -> String {
    at.format(TREND_TIMESTAMP_FORMAT).to_string()
}
