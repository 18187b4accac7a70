//! Sweep execution: instances × parameter values × repetitions.

use std::time::Instant;

use serde::Serialize;

use super::config::{ScheduleComparisonConfig, SweepConfig};
use crate::error::Error;
use crate::instance::LoadedInstance;
use crate::sa::{SaConfig, SaRunner};

/// One aggregated observation: a (instance, swept-value) cell reduced
/// over all repetitions. Never mutated after aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPoint {
    /// Name of the swept hyperparameter.
    pub parameter_name: String,
    /// The swept value this cell was run at.
    pub parameter_value: f64,
    /// City count of the instance.
    pub instance_size: usize,
    /// Known-optimal cost from the solutions file.
    pub optimal_cost: i64,
    /// Minimum cost across repetitions.
    pub best_cost: i64,
    /// Arithmetic mean cost across repetitions.
    pub mean_cost: f64,
    /// Mean wall-clock engine time per repetition, in milliseconds.
    pub mean_time_ms: f64,
}

/// Drives the SA engine across a battery of instances and swept values.
///
/// Runs sequentially: repetitions are independent given their derived
/// seeds, so the loops would parallelize, but ordered execution keeps
/// whole analyses reproducible.
pub struct SweepRunner;

impl SweepRunner {
    /// Runs a single-hyperparameter range sweep.
    ///
    /// Produces one [`AnalysisPoint`] per (instance, value) pair, in
    /// instance-major order.
    pub fn run(
        instances: &[LoadedInstance],
        config: &SweepConfig,
    ) -> Result<Vec<AnalysisPoint>, Error> {
        config.validate().map_err(Error::config)?;

        let parameter_name = config.parameter.analysis_name();
        tracing::info!("SA: {parameter_name} analysis start");
        let values = config.values();
        let mut points = Vec::with_capacity(instances.len() * values.len());

        for (instance_index, loaded) in instances.iter().enumerate() {
            for (value_index, &value) in values.iter().enumerate() {
                tracing::info!(
                    "instance {}/{}: {:.0} %",
                    instance_index + 1,
                    instances.len(),
                    value / config.end * 100.0
                );

                let mut engine_config = config.base.clone();
                config.parameter.apply(&mut engine_config, value);
                engine_config.validate().map_err(|e| {
                    Error::config(format!("swept value {value} for {parameter_name}: {e}"))
                })?;

                let cell_seed = cell_seed(config.seed, instance_index, value_index);
                points.push(measure_cell(
                    loaded,
                    &engine_config,
                    config.repetitions,
                    cell_seed,
                    parameter_name,
                    value,
                ));
            }
        }

        tracing::info!("SA: {parameter_name} analysis done");
        Ok(points)
    }

    /// Runs the dedicated cooling-scheme-parameter sweep for one schedule
    /// family, overriding the base configuration's schedule per value.
    pub fn run_schedule_comparison(
        instances: &[LoadedInstance],
        config: &ScheduleComparisonConfig,
    ) -> Result<Vec<AnalysisPoint>, Error> {
        config.validate().map_err(Error::config)?;

        let parameter_name = config.kind.analysis_name();
        tracing::info!("SA: {parameter_name} parameter analysis start");
        let values = config.values();
        let mut points = Vec::with_capacity(instances.len() * values.len());

        for (instance_index, loaded) in instances.iter().enumerate() {
            for (value_index, &value) in values.iter().enumerate() {
                tracing::info!(
                    "instance {}/{}: {:.0} %",
                    instance_index + 1,
                    instances.len(),
                    value / config.end * 100.0
                );

                let engine_config = config
                    .base
                    .clone()
                    .with_cooling(config.kind.schedule(value));
                engine_config.validate().map_err(|e| {
                    Error::config(format!("swept value {value} for {parameter_name}: {e}"))
                })?;

                let cell_seed = cell_seed(config.seed, instance_index, value_index);
                points.push(measure_cell(
                    loaded,
                    &engine_config,
                    config.repetitions,
                    cell_seed,
                    parameter_name,
                    value,
                ));
            }
        }

        tracing::info!("SA: {parameter_name} parameter analysis done");
        Ok(points)
    }
}

/// Derives a per-cell seed so every (instance, value) cell repeats with
/// independent randomness while the whole sweep stays reproducible.
fn cell_seed(base: u64, instance_index: usize, value_index: usize) -> u64 {
    base.wrapping_add((instance_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((value_index as u64).wrapping_mul(0x0000_0100_0000_01B3))
}

/// Runs one (instance, value) cell and reduces its repetitions.
///
/// Timing wraps only the engine call, so setup overhead does not skew
/// comparisons across parameter values.
fn measure_cell(
    loaded: &LoadedInstance,
    engine_config: &SaConfig,
    repetitions: usize,
    cell_seed: u64,
    parameter_name: &str,
    value: f64,
) -> AnalysisPoint {
    let mut best_cost = i64::MAX;
    let mut cost_sum = 0f64;
    let mut time_sum_ms = 0f64;

    for repetition in 0..repetitions {
        let seed = cell_seed.wrapping_add((repetition as u64).wrapping_mul(1_000_003));
        let config = engine_config.clone().with_seed(seed);

        let start = Instant::now();
        let result = SaRunner::run(&loaded.instance, &config);
        time_sum_ms += start.elapsed().as_secs_f64() * 1000.0;

        cost_sum += result.best_cost as f64;
        if result.best_cost < best_cost {
            best_cost = result.best_cost;
        }
    }

    AnalysisPoint {
        parameter_name: parameter_name.to_string(),
        parameter_value: value,
        instance_size: loaded.instance.city_count(),
        optimal_cost: loaded.optimal_cost,
        best_cost,
        mean_cost: cost_sum / repetitions as f64,
        mean_time_ms: time_sum_ms / repetitions as f64,
    }
}
