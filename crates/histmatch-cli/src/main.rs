//! histmatch - histogram matching CLI
//!
//! Derives a tone curve that maps one image's histogram onto a reference
//! image's histogram, then applies, visualizes, or exports that curve.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "histmatch")]
#[command(author, version, about = "Histogram matching tool")]
#[command(long_about = "
Derives a 256-entry tone curve that remaps one image's histogram onto a
reference image's histogram. Images are processed as 8-bit luma.

Examples:
  histmatch apply graded.png source.png -o out.png
  histmatch apply graded.png source.png -o out.png --show
  histmatch apply graded.png source.png -o other.png --target other_shot.png
  histmatch debug graded.png source.png -o curve.png
  histmatch curve graded.png source.png -o curve.cube
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Remap an image through the matched curve
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Render the curve as a 256x256 diagnostic image
    #[command(visible_alias = "d")]
    Debug(DebugArgs),

    /// Export the curve as a .cube LUT or CSV table
    #[command(visible_alias = "c")]
    Curve(CurveArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Source image whose histogram is analyzed (and remapped)
    source: PathBuf,

    /// Reference image supplying the target histogram
    reference: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Apply the curve to this image instead of the source
    #[arg(long)]
    target: Option<PathBuf>,

    /// Use the raw curve without postprocessing
    #[arg(long)]
    raw: bool,

    /// Draw the computed curve over the output (needs >= 256x256 images)
    #[arg(long)]
    show: bool,

    /// Curve smoothing window half-width (0 disables smoothing)
    #[arg(long, default_value = "8")]
    smoothing_window: i32,
}

#[derive(Args)]
struct DebugArgs {
    /// Source image whose histogram is analyzed
    source: PathBuf,

    /// Reference image supplying the target histogram
    reference: PathBuf,

    /// Output image (always 256x256)
    #[arg(short, long)]
    output: PathBuf,

    /// Use the raw curve without postprocessing
    #[arg(long)]
    raw: bool,

    /// Curve smoothing window half-width (0 disables smoothing)
    #[arg(long, default_value = "8")]
    smoothing_window: i32,
}

#[derive(Args)]
struct CurveArgs {
    /// Source image whose histogram is analyzed
    source: PathBuf,

    /// Reference image supplying the target histogram
    reference: PathBuf,

    /// Output table, .cube or .csv by extension
    #[arg(short, long)]
    output: PathBuf,

    /// Use the raw curve without postprocessing
    #[arg(long)]
    raw: bool,

    /// Curve smoothing window half-width (0 disables smoothing)
    #[arg(long, default_value = "8")]
    smoothing_window: i32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Debug(args) => commands::debug::run(args),
        Commands::Curve(args) => commands::curve::run(args),
    }
}
