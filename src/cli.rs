use crate::model::NumberBag;
use crate::report::{ReportFormat, render};
use crate::solver::{Solver, SolverConfig, SolverError};
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use num_bigint::BigInt;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Combine numbers left to right to get as close to a target as possible
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find the arithmetic combination of numbers closest to a target, using as few numbers as possible"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, in input order
    #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Target number to reach
    #[arg(long, allow_negative_numbers = true)]
    pub target: i64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Output format (default: steps)
    #[arg(short, long, value_enum, default_value = "steps")]
    pub format: ReportFormat,

    /// Search on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for the parallel search (default: one per core)
    #[arg(short = 'j', long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Explore every prefix even when its state was already reached
    #[arg(long)]
    pub no_memo: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub bag: NumberBag,
    pub target: BigInt,
    pub log_level: LogLevel,
    pub format: ReportFormat,
    pub solver: SolverConfig,
}

impl CliArgs {
    /// Validate the raw arguments and build the run configuration
    pub fn into_config(self) -> Result<CliConfig> {
        let bag = NumberBag::new(self.numbers).context("Invalid numbers")?;

        if self.threads == Some(0) {
            bail!("Thread count must be at least 1");
        }

        Ok(CliConfig {
            bag,
            target: BigInt::from(self.target),
            log_level: self.log_level,
            format: self.format,
            solver: SolverConfig {
                parallel: !self.sequential,
                threads: self.threads,
                memoize: !self.no_memo,
            },
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new(config.solver);

    info!(
        "Combining {} numbers towards target {}",
        config.bag.len(),
        config.target
    );

    match solver.solve(&config.bag, &config.target) {
        Ok(solution) => {
            println!("{}", render(&solution, config.format));
            Ok(())
        }
        Err(SolverError::NoSolution) => {
            warn!("No solution found");
            println!("No solution.");
            Ok(())
        }
        Err(err) => Err(err).context("Search failed"),
    }
}
