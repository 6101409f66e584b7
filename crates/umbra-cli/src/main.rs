//! umbra - dark-mode recoloring CLI
//!
//! Applies the extreme luminance inversion to single colors or to the
//! selected layers of a scene document.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

mod commands;

use commands::{apply::ApplyArgs, hsl::HslArgs, invert::InvertArgs, ParamArgs};

#[derive(Parser)]
#[command(name = "umbra")]
#[command(author, version, about = "Dark-mode recoloring via extreme luminance inversion")]
#[command(long_about = "
Recolors colors for dark mode: lightness is inverted and squared, saturation
is cut to 30%. Dark colors become strongly light, light colors weakly dark.

Examples:
  umbra invert '#336699' 0.1,0.1,0.1    # Recolor single colors
  umbra hsl '#ff8000' --inverted        # Show HSL before/after
  umbra apply page.json -o dark.json    # Recolor the document's selection
  umbra apply page.json --select 1:2    # Override the selection
  umbra --config params.yaml invert fff # Tuned parameters
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor one or more colors
    #[command(visible_alias = "i")]
    Invert(InvertArgs),

    /// Show the HSL decomposition of colors
    Hsl(HslArgs),

    /// Recolor the selected layers of a scene document
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let inverter = cli.params.build_inverter()?;

    match cli.command {
        Commands::Invert(args) => commands::invert::run(args, &inverter),
        Commands::Hsl(args) => commands::hsl::run(args, &inverter),
        Commands::Apply(args) => commands::apply::run(args, &inverter, cli.verbose),
    }
}
