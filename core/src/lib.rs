//! Core record model, filtering pipeline, and catalog I/O for the sky-scan
//! anomaly hunting platform.
//!
//! The modules mirror the original survey-analysis flow while providing
//! explicit configuration, named filter policies, and well-defined error
//! surfaces.

pub mod catalog;
pub mod filtering;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use prelude::{FilterThresholds, HuntError, HuntResult, Variant};
