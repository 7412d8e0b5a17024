//! Console reporter — plain-text dashboard for terminals and logs.

use std::fmt::Write as _;

use comply_core::errors::ReportError;
use comply_core::types::TrendDirection;

use super::{ReportSnapshot, Reporter};

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, compliant: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let code = if compliant { "\x1b[32m" } else { "\x1b[31m" };
        format!("{code}{text}\x1b[0m")
    }

    fn direction_label(direction: TrendDirection) -> &'static str {
        match direction {
            TrendDirection::Improving => "improving ↑",
            TrendDirection::Stable => "stable →",
            TrendDirection::Declining => "declining ↓",
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, snapshot: &ReportSnapshot) -> Result<String, ReportError> {
        let mut out = String::new();
        render(self, snapshot, &mut out).map_err(|e| ReportError::Serialization(e.to_string()))?;
        Ok(out)
    }
}

fn render(
    reporter: &ConsoleReporter,
    snapshot: &ReportSnapshot,
    out: &mut String,
) -> std::fmt::Result {
    writeln!(out, "╔══════════════════════════════════════════╗")?;
    writeln!(out, "║     Regulatory Compliance Dashboard      ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝")?;
    writeln!(out, "Generated: {}", snapshot.generated_at)?;
    writeln!(
        out,
        "Overall Compliance: {:.2}% ({}/{} controls compliant)",
        snapshot.overall_pct, snapshot.compliant_controls, snapshot.total_controls
    )?;
    writeln!(out)?;

    writeln!(out, "Frameworks")?;
    writeln!(
        out,
        "  {:<20} {:>8} {:>9} {:>11} {:>7}",
        "Framework", "Controls", "Compliant", "WeightTotal", "Pct"
    )?;
    for f in &snapshot.frameworks {
        writeln!(
            out,
            "  {:<20} {:>8} {:>9} {:>11} {:>6.2}%",
            f.framework, f.control_count, f.compliant_count, f.weight_total, f.pct
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Controls")?;
    for c in &snapshot.controls {
        let actual = c
            .actual_value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  {:<12} {:<12} w={:<6} {:<16} {}",
            c.id,
            c.framework,
            c.weight,
            actual,
            reporter.paint(&c.status, c.compliant_flag == 1)
        )?;
    }
    if snapshot.truncated {
        writeln!(
            out,
            "  … {} more controls not shown",
            snapshot.total_controls - snapshot.controls.len()
        )?;
    }

    if !snapshot.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Data integrity warnings")?;
        for w in &snapshot.warnings {
            writeln!(out, "  ⚠ {w}")?;
        }
    }

    writeln!(out)?;
    write!(
        out,
        "Trend: {} run(s), {}",
        snapshot.trend.len(),
        ConsoleReporter::direction_label(snapshot.trend_direction)
    )?;
    if let Some(delta) = snapshot.trend_delta {
        write!(out, " ({delta:+.2} since last run)")?;
    }
    writeln!(out)?;

    Ok(())
}
