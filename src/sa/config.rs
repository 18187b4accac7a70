//! SA configuration and cooling schedules.

use serde::{Deserialize, Serialize};

/// Cooling schedule family, without its numeric parameter.
///
/// Used where a schedule must be named before its parameter is known —
/// on the command line and in the schedule-comparison sweep, which varies
/// the parameter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Linear,
    Geometric,
    Logarithmic,
}

impl ScheduleKind {
    /// Attaches a numeric parameter, producing a usable schedule.
    pub fn schedule(self, parameter: f64) -> CoolingSchedule {
        match self {
            ScheduleKind::Linear => CoolingSchedule::Linear { rate: parameter },
            ScheduleKind::Geometric => CoolingSchedule::Geometric { factor: parameter },
            ScheduleKind::Logarithmic => CoolingSchedule::Logarithmic { offset: parameter },
        }
    }

    /// Name used for this schedule in result tables.
    pub fn analysis_name(self) -> &'static str {
        match self {
            ScheduleKind::Linear => "linear_cooling_scheme",
            ScheduleKind::Geometric => "geometric_cooling_scheme",
            ScheduleKind::Logarithmic => "logarithmic_cooling_scheme",
        }
    }
}

/// Cooling schedule for temperature reduction.
///
/// Each variant carries its own parameter; schedules are compared by tag,
/// never by function identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `T_e = T_0 - rate * e`. Defined only while the result stays
    /// positive; the engine stops once it no longer does.
    Linear {
        /// Amount subtracted per epoch. Must be positive.
        rate: f64,
    },

    /// `T_e = T_0 * factor^e`. The textbook geometric schedule.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        factor: f64,
    },

    /// `T_e = T_0 / ln(e + offset)`.
    Logarithmic {
        /// Shift inside the logarithm. Must be positive so that
        /// `e + offset > 1` for every epoch `e >= 1`.
        offset: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { factor: 0.95 }
    }
}

impl CoolingSchedule {
    /// Temperature at epoch `step`, given the initial temperature.
    ///
    /// Pure and deterministic. Every schedule yields `initial` at step 0;
    /// the closed-form expressions apply from step 1 on. (The logarithmic
    /// formula does not collapse to `initial` at step 0 on its own, so
    /// step 0 is handled explicitly for all variants.)
    pub fn temperature(&self, initial: f64, step: usize) -> f64 {
        if step == 0 {
            return initial;
        }
        match *self {
            CoolingSchedule::Linear { rate } => initial - rate * step as f64,
            CoolingSchedule::Geometric { factor } => initial * factor.powi(step as i32),
            CoolingSchedule::Logarithmic { offset } => initial / (step as f64 + offset).ln(),
        }
    }

    /// The schedule family, without its parameter.
    pub fn kind(&self) -> ScheduleKind {
        match self {
            CoolingSchedule::Linear { .. } => ScheduleKind::Linear,
            CoolingSchedule::Geometric { .. } => ScheduleKind::Geometric,
            CoolingSchedule::Logarithmic { .. } => ScheduleKind::Logarithmic,
        }
    }

    /// Validates the schedule parameter.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            CoolingSchedule::Linear { rate } => {
                if rate <= 0.0 {
                    return Err(format!("linear rate must be positive, got {rate}"));
                }
            }
            CoolingSchedule::Geometric { factor } => {
                if factor <= 0.0 || factor >= 1.0 {
                    return Err(format!("geometric factor must be in (0, 1), got {factor}"));
                }
            }
            CoolingSchedule::Logarithmic { offset } => {
                if offset <= 0.0 {
                    return Err(format!("logarithmic offset must be positive, got {offset}"));
                }
            }
        }
        Ok(())
    }
}

/// Configuration for one SA engine run.
///
/// Immutable per run. The sweep harness builds a default configuration and
/// overrides exactly one field per swept value.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling(CoolingSchedule::Geometric { factor: 0.98 })
///     .with_epochs(50)
///     .with_epoch_iterations(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Move attempts per temperature level.
    pub epoch_iterations: usize,

    /// Number of temperature levels (outer epochs).
    pub epochs: usize,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling: CoolingSchedule::default(),
            epoch_iterations: 100,
            epochs: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_epoch_iterations(mut self, n: usize) -> Self {
        self.epoch_iterations = n;
        self
    }

    pub fn with_epochs(mut self, n: usize) -> Self {
        self.epochs = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        self.cooling.validate()
    }
}
