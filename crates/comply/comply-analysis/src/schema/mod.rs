//! Header-to-field schema mapping, done once per table at load time.

pub mod columns;

pub use columns::{ColumnMap, Field, TableSchema, BASELINE_SCHEMA, EVIDENCE_SCHEMA};
