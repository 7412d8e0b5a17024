//! Analysis engine for the Comply scoring pipeline.
//!
//! Loaders turn CSV sources into typed records through an explicit schema
//! mapping step. The reconciler joins baseline and evidence, the scorer rolls
//! the result up per framework, and the trend module extends the historical
//! series. Reporters render a [`reporters::ReportSnapshot`] of all of it.

pub mod loaders;
pub mod reconcile;
pub mod reporters;
pub mod schema;
pub mod scoring;
pub mod trends;
