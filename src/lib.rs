//! Simulated-annealing local search for the Traveling Salesman Problem,
//! plus the parameter-sweep harness used to study how its hyperparameters
//! affect solution quality and running time.
//!
//! # Architecture
//!
//! - [`instance`]: cost matrices loaded from text files, with symmetry
//!   autodetection and known-optimal lookups from companion solutions
//!   files.
//! - [`sa`]: the engine — tours, cooling schedules, the Metropolis
//!   acceptance loop.
//! - [`sweep`]: the experiment harness — varies exactly one
//!   hyperparameter across a half-open range, repeats each cell, and
//!   reduces the samples into [`sweep::AnalysisPoint`]s.
//! - [`report`]: CSV result tables.
//!
//! Runs are pure functions of (instance, configuration, seed): the sweep
//! derives per-repetition seeds, so whole analyses reproduce exactly.

pub mod error;
pub mod instance;
pub mod report;
pub mod sa;
pub mod sweep;

pub use error::Error;
