//! Weighted compliance scoring.
//!
//! overall_pct = round2(Σ score / Σ weight × 100), 0.0 when Σ weight == 0
//! score       = compliant_flag × weight

pub mod rounding;
pub mod scorer;

pub use rounding::round_pct;
pub use scorer::{compliant_flag, control_score, weighted_pct, Scorer};
