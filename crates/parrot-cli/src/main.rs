mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parrot", about = "Animated avatar generation tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Isolate the dominant foreground of a photo
    Segment(commands::segment::SegmentArgs),
    /// Crop a photo to the dominant face
    Crop(commands::crop::CropArgs),
    /// Apply the oval vignette to a face crop
    Vignette(commands::vignette::VignetteArgs),
    /// Run the full avatar pipeline
    Generate(commands::generate::GenerateArgs),
    /// Print a default pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Segment(args) => commands::segment::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Vignette(args) => commands::vignette::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
