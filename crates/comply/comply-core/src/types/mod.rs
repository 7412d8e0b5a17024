//! Data model for the scoring pipeline.
//!
//! Every type here is a plain value object. Records flow one way:
//! baseline/evidence records → merged controls → score report → trend.

pub mod collections;
pub mod control;
pub mod merged;
pub mod score;
pub mod trend;

pub use collections::{FxHashMap, FxHashSet};
pub use control::{ActualValue, ControlRecord, EvidenceRecord};
pub use merged::{DataIntegrityWarning, MergedControl, Reconciliation};
pub use score::{FrameworkSummary, ScoreReport};
pub use trend::{trend_timestamp, TrendDirection, TrendPoint, TrendSeries};
