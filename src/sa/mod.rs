//! Simulated Annealing (SA) local search for the TSP.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod tour;

pub use config::{CoolingSchedule, SaConfig, ScheduleKind};
pub use runner::{SaResult, SaRunner};
pub use tour::Tour;
