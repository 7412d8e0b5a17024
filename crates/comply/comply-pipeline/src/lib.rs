//! One-shot orchestration of a Comply scoring run.
//!
//! load → merge → score → append trend → render, with every fallible read
//! done before the first output file is written.

pub mod runner;

pub use runner::{run, run_at, RunOutcome};
