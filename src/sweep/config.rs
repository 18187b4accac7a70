//! Sweep configuration: which hyperparameter to vary, and over what range.

use serde::{Deserialize, Serialize};

use crate::sa::{SaConfig, ScheduleKind};

/// The engine hyperparameter a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    /// `SaConfig::initial_temperature`.
    InitialTemperature,
    /// `SaConfig::epoch_iterations` (move attempts per temperature level).
    EpochIterations,
    /// `SaConfig::epochs` (number of temperature levels).
    TemperatureLevels,
    /// The cooling schedule's own parameter. Rejected by the range sweep:
    /// its valid range and meaning differ per schedule, so it is swept via
    /// the dedicated schedule comparison instead.
    CoolingParameter,
}

impl SweepParameter {
    /// Name used for this parameter in result tables.
    pub fn analysis_name(self) -> &'static str {
        match self {
            SweepParameter::InitialTemperature => "initial_temperature",
            SweepParameter::EpochIterations => "epoch_iterations_number",
            SweepParameter::TemperatureLevels => "iterations_number",
            SweepParameter::CoolingParameter => "cooling_scheme_parameter",
        }
    }

    /// Overrides exactly this parameter's field on `config`.
    ///
    /// Integer-valued hyperparameters truncate the swept value.
    pub fn apply(self, config: &mut SaConfig, value: f64) {
        match self {
            SweepParameter::InitialTemperature => config.initial_temperature = value,
            SweepParameter::EpochIterations => config.epoch_iterations = value as usize,
            SweepParameter::TemperatureLevels => config.epochs = value as usize,
            SweepParameter::CoolingParameter => {
                config.cooling = config.cooling.kind().schedule(value)
            }
        }
    }
}

/// Enumerates swept values over the half-open range `[start, end)`.
///
/// Values are `start + i * step` with `step = (end - start) / steps`,
/// generated by index rather than accumulation so floating-point drift
/// can never emit an extra value. The literal `end` is never tested; the
/// bound is deliberately exclusive.
pub(crate) fn sweep_values(start: f64, end: f64, steps: usize) -> Vec<f64> {
    let step = (end - start) / steps as f64;
    (0..steps)
        .map(|i| start + i as f64 * step)
        .filter(|value| *value < end)
        .collect()
}

/// Configuration for a single-hyperparameter range sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// The hyperparameter to vary; every other field stays at `base`.
    pub parameter: SweepParameter,
    /// Inclusive lower bound of the swept range.
    pub start: f64,
    /// Exclusive upper bound of the swept range.
    pub end: f64,
    /// Number of range subdivisions (at most this many values are tested).
    pub steps: usize,
    /// Engine runs per (instance, value) cell.
    pub repetitions: usize,
    /// Defaults for the non-swept fields.
    pub base: SaConfig,
    /// Base seed; per-repetition seeds are derived from it.
    pub seed: u64,
}

impl SweepConfig {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        steps: usize,
        repetitions: usize,
    ) -> Self {
        Self {
            parameter,
            start,
            end,
            steps,
            repetitions,
            base: SaConfig::default(),
            seed: 0,
        }
    }

    pub fn with_base(mut self, base: SaConfig) -> Self {
        self.base = base;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The parameter values this sweep will test.
    pub fn values(&self) -> Vec<f64> {
        sweep_values(self.start, self.end, self.steps)
    }

    /// Validates the sweep configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.parameter == SweepParameter::CoolingParameter {
            return Err(
                "the cooling scheme parameter cannot be range-swept: its valid range and \
                 meaning differ per schedule; use the schedule comparison instead"
                    .to_string(),
            );
        }
        if !(self.start < self.end) {
            return Err(format!(
                "sweep range is empty: start {} must be below end {}",
                self.start, self.end
            ));
        }
        if self.steps == 0 {
            return Err("sweep needs at least one step".to_string());
        }
        if self.repetitions == 0 {
            return Err("sweep needs at least one repetition".to_string());
        }
        self.base.validate()
    }
}

/// Configuration for the dedicated cooling-scheme-parameter sweep.
///
/// Varies one schedule family's parameter over a range while every other
/// engine field stays at `base`. This is the only way the cooling
/// parameter is swept (see [`SweepParameter::CoolingParameter`]).
#[derive(Debug, Clone)]
pub struct ScheduleComparisonConfig {
    pub kind: ScheduleKind,
    pub start: f64,
    pub end: f64,
    pub steps: usize,
    pub repetitions: usize,
    pub base: SaConfig,
    pub seed: u64,
}

impl ScheduleComparisonConfig {
    pub fn new(kind: ScheduleKind, start: f64, end: f64, steps: usize, repetitions: usize) -> Self {
        Self {
            kind,
            start,
            end,
            steps,
            repetitions,
            base: SaConfig::default(),
            seed: 0,
        }
    }

    pub fn with_base(mut self, base: SaConfig) -> Self {
        self.base = base;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The schedule-parameter values this comparison will test.
    pub fn values(&self) -> Vec<f64> {
        sweep_values(self.start, self.end, self.steps)
    }

    /// Validates the range shape; per-value schedule validity is checked
    /// as each configuration is built, since it depends on the value.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.start < self.end) {
            return Err(format!(
                "sweep range is empty: start {} must be below end {}",
                self.start, self.end
            ));
        }
        if self.steps == 0 {
            return Err("sweep needs at least one step".to_string());
        }
        if self.repetitions == 0 {
            return Err("sweep needs at least one repetition".to_string());
        }
        if self.base.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.base.initial_temperature
            ));
        }
        Ok(())
    }
}
