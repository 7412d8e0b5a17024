//! Core crate for the Comply scoring pipeline.
//!
//! Holds everything the other crates share: the data model, one error enum
//! per concern, layered configuration, tracing setup, and constants.
//! Nothing in here touches the evidence or baseline files directly.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
