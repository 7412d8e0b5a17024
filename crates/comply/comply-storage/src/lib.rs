//! Flat-file persistence for Comply.
//!
//! - `atomic` — temp-file-then-rename writes, so readers never see half a file
//! - `summary` — framework summary table, overwritten each run
//! - `trend_store` — trend history read/append/rewrite under an exclusive lock

pub mod atomic;
pub mod summary;
pub mod trend_store;

pub use atomic::write_atomic;
pub use summary::{render_framework_summary, write_framework_summary};
pub use trend_store::TrendStore;
