//! Baseline ⟕ evidence reconciliation.

pub mod merger;

pub use merger::{merge, Reconciler};
