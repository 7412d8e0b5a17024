//! Per-control flags and per-framework aggregation.

use comply_core::constants::COMPLIANT_STATUS;
use comply_core::types::{FrameworkSummary, FxHashMap, MergedControl, ScoreReport};

use super::rounding::round_pct;

/// 1 iff `status`, trimmed and lower-cased, is exactly "compliant".
/// There is no partial credit.
pub fn compliant_flag(status: &str) -> u8 {
    u8::from(status.trim().to_lowercase() == COMPLIANT_STATUS)
}

/// Flag and weighted score for one control.
pub fn control_score(status: &str, weight: f64) -> (u8, f64) {
    let flag = compliant_flag(status);
    (flag, f64::from(flag) * weight)
}

/// Rounded weighted percentage; zero total weight yields 0.0.
pub fn weighted_pct(score_sum: f64, weight_sum: f64) -> f64 {
    if weight_sum > 0.0 {
        round_pct(score_sum / weight_sum * 100.0)
    } else {
        0.0
    }
}

/// Rolls merged controls up into an overall percentage and a per-framework
/// breakdown. Pure: the same input always yields the same report.
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, controls: &[MergedControl]) -> ScoreReport {
        let mut groups: Vec<Group<'_>> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut score_sum = 0.0;
        let mut weight_sum = 0.0;

        for control in controls {
            score_sum += control.score;
            weight_sum += control.weight;

            let slot = *index.entry(control.framework.as_str()).or_insert_with(|| {
                groups.push(Group::new(&control.framework));
                groups.len() - 1
            });
            groups[slot].add(control);
        }

        let frameworks = groups.into_iter().map(Group::finish).collect();

        if weight_sum <= 0.0 {
            tracing::debug!(controls = controls.len(), "total weight is zero; overall score is 0");
        }

        ScoreReport {
            overall_pct: weighted_pct(score_sum, weight_sum),
            frameworks,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

struct Group<'a> {
    framework: &'a str,
    control_count: usize,
    compliant_count: usize,
    weight_total: f64,
    score_total: f64,
}

impl<'a> Group<'a> {
    fn new(framework: &'a str) -> Self {
        Self {
            framework,
            control_count: 0,
            compliant_count: 0,
            weight_total: 0.0,
            score_total: 0.0,
        }
    }

    fn add(&mut self, control: &MergedControl) {
        self.control_count += 1;
        self.compliant_count += usize::from(control.compliant_flag);
        self.weight_total += control.weight;
        self.score_total += control.score;
    }

    fn finish(self) -> FrameworkSummary {
        if self.weight_total <= 0.0 {
            tracing::debug!(framework = self.framework, "framework weight is zero; pct is 0");
        }
        FrameworkSummary {
            framework: self.framework.to_string(),
            control_count: self.control_count,
            compliant_count: self.compliant_count,
            weight_total: self.weight_total,
            pct: weighted_pct(self.score_total, self.weight_total),
        }
    }
}
