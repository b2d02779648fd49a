//! morph - plain-text pixel-map processing and morphing CLI
//!
//! Loads textual PPM (P3) images, applies flips / grayscale /
//! nearest-neighbor rescaling, and animates a cross-fade between an
//! image and its grayscale version in the terminal.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "morph")]
#[command(author, version, about = "Pixel-map processing and morphing CLI")]
#[command(long_about = "
Processes plain-text pixel maps (PPM P3) and renders morph animations
in the terminal.

Examples:
  morph info cake.ppm                      # Show image info
  morph morph cake.ppm 50                  # Cross-fade to grayscale, 50 steps
  morph morph cake.ppm 50 --delay-ms 30    # Slower frame pacing
  morph transform in.ppm -o out.ppm --flip-h --grayscale
  morph resize in.ppm -o out.ppm -w 64 -H 48
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
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Morph an image into its grayscale version in the terminal
    #[command(visible_alias = "m")]
    Morph(MorphArgs),

    /// Flip and/or grayscale an image
    #[command(visible_alias = "t")]
    Transform(TransformArgs),

    /// Rescale an image (nearest-neighbor)
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct MorphArgs {
    /// Input image
    input: PathBuf,

    /// Number of morph steps (>= 1)
    steps: u32,

    /// Delay between frames in milliseconds
    #[arg(long, default_value = "10")]
    delay_ms: u64,
}

#[derive(Args)]
struct TransformArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Flip horizontal
    #[arg(long)]
    flip_h: bool,

    /// Flip vertical
    #[arg(long)]
    flip_v: bool,

    /// Convert to grayscale
    #[arg(long)]
    grayscale: bool,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Target width
    #[arg(short, long)]
    width: u32,

    /// Target height
    #[arg(short = 'H', long)]
    height: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Morph(args) => commands::morph::run(args, cli.verbose),
        Commands::Transform(args) => commands::transform::run(args, cli.verbose),
        Commands::Resize(args) => commands::resize::run(args, cli.verbose),
    }
}
