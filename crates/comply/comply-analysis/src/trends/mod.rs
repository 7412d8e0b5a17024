//! Trend accumulation and direction analysis.

pub mod accumulator;
pub mod analyzer;

pub use accumulator::append_trend;
pub use analyzer::TrendAnalyzer;
