//! bingo-mc CLI - Monte Carlo line-completion estimation
//!
//! Operational entry point for the bingo-mc workspace.
//!
//! # Commands
//!
//! - `bingo-mc run` - Run a batch of trials and print the per-rank report
//! - `bingo-mc check` - Report parallel capacity and configuration defaults
//!
//! # Architecture
//!
//! The CLI is the service layer: it owns argument parsing, logging setup,
//! phase timing and report formatting, and orchestrates `bingo_engine` for
//! the actual computation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod stopwatch;

pub use error::{CliError, Result};

/// bingo-mc: line-completion draw-count estimator
#[derive(Parser)]
#[command(name = "bingo-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Draw-source engine selection.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineArg {
    /// rand StdRng (default)
    Standard,
    /// rand SmallRng, higher throughput
    Fast,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of trials and print per-rank statistics
    Run {
        /// Number of board rows
        #[arg(long, default_value = "5")]
        rows: u32,

        /// Number of board columns
        #[arg(long, default_value = "5")]
        columns: u32,

        /// Number of independent trials
        #[arg(short, long, default_value = "100000")]
        trials: usize,

        /// Base seed; omitted means a fresh seed from system entropy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Draw-source engine
        #[arg(short, long, value_enum, default_value = "standard")]
        engine: EngineArg,

        /// Share one mutex-guarded draw source across all trials
        #[arg(long)]
        shared_source: bool,

        /// Record per-cell fill events alongside per-line events
        #[arg(long)]
        track_cells: bool,

        /// Directory for per-rank distribution CSV files
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: commands::run::OutputFormat,
    },

    /// Check parallel capacity and configuration defaults
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            rows,
            columns,
            trials,
            seed,
            engine,
            shared_source,
            track_cells,
            dist_dir,
            format,
        } => commands::run::run(commands::run::RunArgs {
            rows,
            columns,
            trials,
            seed,
            engine: match engine {
                EngineArg::Standard => bingo_core::rng::EngineKind::Standard,
                EngineArg::Fast => bingo_core::rng::EngineKind::Fast,
            },
            shared_source,
            track_cells,
            dist_dir,
            format,
        }),
        Commands::Check => commands::check::run(),
    }
}
