//! pfm - Portable Float Map inspector
//!
//! Loads PFM images and reports their shape, channels and sample statistics.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pfm_core::WorkerPool;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pfm")]
#[command(author, version, about = "Portable Float Map inspector")]
#[command(long_about = "
Loads Portable Float Map (PFM) images and reports what they contain.

Examples:
  pfm info env.pfm                      # Size, channels, header scale
  pfm info env.pfm --stats              # Per-channel min/max/mean
  pfm info env.pfm -c \"b,r\"             # Only B and R, in that order
  pfm -j 1 info *.pfm --json            # Single worker, JSON output
  pfm probe unknown.bin                 # Magic check only
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of decode threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Check whether files carry the PFM magic
    #[command(visible_alias = "p")]
    Probe(ProbeArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Channel selector: comma/space separated, case-insensitive substrings
    #[arg(short, long, default_value = "")]
    channels: String,

    /// Show per-channel stats
    #[arg(short, long)]
    stats: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ProbeArgs {
    /// Input file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Installs the stderr log subscriber. `RUST_LOG` applies unless `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pool = WorkerPool::new(cli.threads).context("Failed to configure worker pool")?;
    tracing::debug!(threads = pool.num_threads(), "worker pool ready");

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &pool, cli.verbose),
        Commands::Probe(args) => commands::probe::run(args),
    }
}
