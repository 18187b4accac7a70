//! Parameter-sweep experiment harness.
//!
//! Varies exactly one SA hyperparameter across a numeric range while
//! holding the rest at defaults, runs the engine repeatedly per
//! (instance, value) cell, and reduces each cell into one
//! [`AnalysisPoint`].

mod config;
mod runner;

pub use config::{ScheduleComparisonConfig, SweepConfig, SweepParameter};
pub use runner::{AnalysisPoint, SweepRunner};
