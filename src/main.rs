//! Command-line driver for SA hyperparameter analysis.
//!
//! Loads one or more instance groups, runs a sweep over a single
//! hyperparameter (or a cooling-schedule parameter comparison), and
//! writes the aggregated table as CSV.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tsp_anneal::error::Error;
use tsp_anneal::instance::{InstanceGroup, LoadedInstance};
use tsp_anneal::report;
use tsp_anneal::sa::ScheduleKind;
use tsp_anneal::sweep::{ScheduleComparisonConfig, SweepConfig, SweepParameter, SweepRunner};

const ANALYSIS_NAME: &str = "simulated_annealing";

#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Instance group directory; repeatable. Each directory holds `*.txt`
    /// instances plus a solutions file.
    #[arg(short, long = "group", value_name = "DIR", global = true)]
    groups: Vec<PathBuf>,

    /// Solutions file name inside each group directory.
    #[arg(long, value_name = "FILE", default_value = "solutions.txt", global = true)]
    solutions: String,

    /// Directory for result tables.
    #[arg(short, long, value_name = "DIR", default_value = "results", global = true)]
    output: PathBuf,

    /// Base seed; every repetition derives its own seed from it.
    #[arg(long, default_value_t = 0, global = true)]
    seed: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep one engine hyperparameter across a half-open range [start, end).
    Sweep {
        #[arg(short, long, value_enum)]
        parameter: SweepParameter,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Range subdivisions; at most this many values are tested.
        #[arg(long, default_value_t = 3)]
        steps: usize,
        /// Engine runs per (instance, value) cell.
        #[arg(short, long, default_value_t = 5)]
        repetitions: usize,
    },
    /// Sweep one cooling schedule's own parameter (the schedule comparison).
    Schedules {
        #[arg(short = 'S', long, value_enum)]
        schedule: ScheduleKind,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 2)]
        steps: usize,
        #[arg(short, long, default_value_t = 2)]
        repetitions: usize,
    },
}

fn load_groups(cli: &Cli) -> Result<Vec<LoadedInstance>, Error> {
    if cli.groups.is_empty() {
        return Err(Error::config(
            "no instance groups given; pass at least one --group DIR",
        ));
    }
    let mut instances = Vec::new();
    for directory in &cli.groups {
        let group = InstanceGroup::from_directory(directory, cli.solutions.clone())?;
        tracing::info!(
            "group {}: {} instance file(s)",
            directory.display(),
            group.instance_files.len()
        );
        instances.extend(group.load()?);
    }
    if instances.is_empty() {
        return Err(Error::config("instance groups contain no instance files"));
    }
    Ok(instances)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let (points, repetitions) = match cli.command {
        Command::Sweep {
            parameter,
            start,
            end,
            steps,
            repetitions,
        } => {
            let config = SweepConfig::new(parameter, start, end, steps, repetitions)
                .with_seed(cli.seed);
            // reject bad selectors before touching any files
            config.validate().map_err(Error::config)?;
            let instances = load_groups(&cli)?;
            (SweepRunner::run(&instances, &config)?, repetitions)
        }
        Command::Schedules {
            schedule,
            start,
            end,
            steps,
            repetitions,
        } => {
            let config = ScheduleComparisonConfig::new(schedule, start, end, steps, repetitions)
                .with_seed(cli.seed);
            config.validate().map_err(Error::config)?;
            let instances = load_groups(&cli)?;
            (
                SweepRunner::run_schedule_comparison(&instances, &config)?,
                repetitions,
            )
        }
    };

    let path = report::write_analysis(&cli.output, ANALYSIS_NAME, repetitions, &points)?;
    tracing::info!("wrote {} analysis point(s) to {}", points.len(), path.display());
    Ok(())
}
