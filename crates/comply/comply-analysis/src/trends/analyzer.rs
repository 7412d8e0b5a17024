//! Trend direction from the overall-score history.

use comply_core::constants::{DEFAULT_TREND_WINDOW, TREND_DIRECTION_THRESHOLD};
use comply_core::types::{TrendDirection, TrendSeries};

use crate::scoring::round_pct;

/// Compares the mean of the most recent window against the window before it.
///
/// With at least `2 × window` points the windows are the last `window`
/// points and the `window` points before those. Shorter series are split
/// in half (the later half is the recent window). A mean shift beyond
/// ±2 percentage points counts as movement.
pub struct TrendAnalyzer {
    window: usize,
}

impl TrendAnalyzer {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    pub fn classify(&self, scores: &[f64]) -> TrendDirection {
        let n = scores.len();
        if n < 2 {
            return TrendDirection::Stable;
        }

        let (older, recent) = if n >= 2 * self.window {
            (
                &scores[n - 2 * self.window..n - self.window],
                &scores[n - self.window..],
            )
        } else {
            scores.split_at(n / 2)
        };

        let delta = mean(recent) - mean(older);
        if delta > TREND_DIRECTION_THRESHOLD {
            TrendDirection::Improving
        } else if delta < -TREND_DIRECTION_THRESHOLD {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    pub fn classify_series(&self, series: &TrendSeries) -> TrendDirection {
        self.classify(&series.values())
    }

    /// Change between the last two runs, if there are two.
    pub fn delta(&self, series: &TrendSeries) -> Option<f64> {
        match series.points() {
            [.., prev, last] => Some(round_pct(last.overall_pct - prev.overall_pct)),
            _ => None,
        }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TREND_WINDOW)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
