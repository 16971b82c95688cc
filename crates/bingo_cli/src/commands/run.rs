//! Run command implementation.
//!
//! Builds the simulation configuration from CLI flags, executes the batch,
//! aggregates per-rank statistics and renders the report. The engine crates
//! stay free of any formatting or file I/O; everything user-visible lives
//! here.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use bingo_core::rng::EngineKind;
use bingo_core::SimulationConfig;
use bingo_engine::{run_batch, summarise_all, summarise_cells, CellSummary, RankSummary};

use crate::stopwatch::Stopwatch;
use crate::Result;

/// Report output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One report line per rank on stdout
    Table,
    /// Pretty-printed JSON report
    Json,
}

/// Arguments for the run command.
pub struct RunArgs {
    /// Number of board rows.
    pub rows: u32,
    /// Number of board columns.
    pub columns: u32,
    /// Number of independent trials.
    pub trials: usize,
    /// Base seed; `None` draws one from system entropy.
    pub seed: Option<u64>,
    /// Draw-source engine.
    pub engine: EngineKind,
    /// Share one mutex-guarded draw source across trials.
    pub shared_source: bool,
    /// Record per-cell fill events.
    pub track_cells: bool,
    /// Directory for per-rank distribution CSV files.
    pub dist_dir: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
}

/// The full report: per-line summaries plus, when cell tracking is on,
/// per-reveal summaries.
#[derive(Serialize)]
struct Report<'a> {
    lines: &'a [RankSummary],
    #[serde(skip_serializing_if = "Option::is_none")]
    cells: Option<&'a [CellSummary]>,
}

/// Run the run command.
pub fn run(args: RunArgs) -> Result<()> {
    // Seeding failures here are fatal by design: the whole estimate depends
    // on a genuinely random starting point when no seed is pinned.
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let config = SimulationConfig::builder()
        .rows(args.rows)
        .columns(args.columns)
        .trials(args.trials)
        .seed(seed)
        .engine(args.engine)
        .shared_source(args.shared_source)
        .track_cells(args.track_cells)
        .build()?;

    info!(
        "Running {} trials on a {}×{} board (seed {}, engine {:?}{})",
        config.trials(),
        args.rows,
        args.columns,
        seed,
        config.engine(),
        if config.shared_source() {
            ", shared source"
        } else {
            ""
        }
    );

    let mut watch = Stopwatch::start();

    let results = run_batch(&config)?;
    watch.checkpoint("trials complete");

    let summaries = summarise_all(&results)?;
    let cell_summaries = if config.track_cells() {
        Some(summarise_cells(&results)?)
    } else {
        None
    };
    watch.checkpoint("aggregation complete");

    let report = Report {
        lines: &summaries,
        cells: cell_summaries.as_deref(),
    };

    match args.format {
        OutputFormat::Table => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(dir) = args.dist_dir.as_deref() {
        write_distributions(dir, &summaries)?;
        watch.checkpoint("distributions written");
    }

    watch.report();
    Ok(())
}

/// Prints one report line per completion rank, then per reveal position
/// when cell tracking was on.
fn print_report(report: &Report<'_>) {
    for summary in report.lines {
        println!(
            "line {:>2}: mean draws {:>6.1}, efficiency {:>5.1} draws/line, \
             median {:>6.1}, mode {:>4}, std dev {:>6.2}, mean cells filled {:>5.1}",
            summary.rank + 1,
            summary.mean_draws,
            summary.efficiency,
            summary.median_draws,
            summary.mode_draws,
            summary.std_dev_draws,
            summary.mean_cells_revealed,
        );
    }

    if let Some(cells) = report.cells {
        println!();
        for summary in cells {
            println!(
                "cell {:>2}: mean draws {:>6.1}, median {:>6.1}, std dev {:>6.2}",
                summary.reveal + 1,
                summary.mean_draws,
                summary.median_draws,
                summary.std_dev_draws,
            );
        }
    }
}

/// Writes one `draws,count` CSV file per rank into `dir`.
fn write_distributions(dir: &Path, summaries: &[RankSummary]) -> Result<()> {
    fs::create_dir_all(dir)?;

    for summary in summaries {
        let path = dir.join(format!("rank_{:02}_distribution.csv", summary.rank + 1));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["draws", "count"])?;
        for (draws, count) in &summary.distribution {
            writer.write_record([draws.to_string(), count.to_string()])?;
        }
        writer.flush()?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
