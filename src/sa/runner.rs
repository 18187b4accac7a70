//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::tour::Tour;
use crate::instance::TspInstance;

/// Result of one SA engine run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found, tracked across every candidate seen.
    pub best_tour: Tour,

    /// Cost of the best tour.
    pub best_cost: i64,

    /// Cost of the initial tour the run started from.
    pub initial_cost: i64,

    /// Temperature levels actually executed (may be fewer than
    /// `config.epochs` if the schedule degenerated early).
    pub epochs_completed: usize,

    /// Total neighbour evaluations.
    pub attempted_moves: usize,

    /// Moves accepted (improvements and Metropolis acceptances).
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Temperature of the last epoch that ran.
    pub final_temperature: f64,
}

/// Executes the simulated-annealing local search.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `instance` under `config`.
    ///
    /// Total for every valid configuration and `city_count >= 2`; smaller
    /// instances return a degenerate zero-cost tour immediately. The run
    /// is a pure function of (instance, configuration, seed).
    pub fn run(instance: &TspInstance, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = instance.city_count();
        if n < 2 {
            let tour = Tour::identity(n);
            return SaResult {
                best_cost: instance.tour_cost(&tour),
                initial_cost: 0,
                best_tour: tour,
                epochs_completed: 0,
                attempted_moves: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: config.initial_temperature,
            };
        }

        // Initialize
        let mut current = Tour::random(n, &mut rng);
        let mut current_cost = instance.tour_cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut epochs_completed = 0usize;
        let mut attempted_moves = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut final_temperature = config.initial_temperature;

        for epoch in 0..config.epochs {
            let temperature = config
                .cooling
                .temperature(config.initial_temperature, epoch);
            // Degenerate temperature: stop instead of dividing by zero or
            // feeding NaN into the acceptance rule.
            if !temperature.is_finite() || temperature <= 0.0 {
                break;
            }
            final_temperature = temperature;

            for _ in 0..config.epoch_iterations {
                let candidate = current.propose_swap(&mut rng);
                let candidate_cost = instance.tour_cost(&candidate);
                let delta = (candidate_cost - current_cost) as f64;

                // Best tracking is independent of acceptance: acceptance
                // governs exploration, best-tracking the reported answer.
                if candidate_cost < best_cost {
                    best = candidate.clone();
                    best_cost = candidate_cost;
                }

                // Metropolis acceptance criterion
                let accept =
                    delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp();
                if accept {
                    if delta < 0.0 {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;
                }
                attempted_moves += 1;
            }
            epochs_completed = epoch + 1;
        }

        SaResult {
            best_tour: best,
            best_cost,
            initial_cost,
            epochs_completed,
            attempted_moves,
            accepted_moves,
            improving_moves,
            final_temperature,
        }
    }
}
