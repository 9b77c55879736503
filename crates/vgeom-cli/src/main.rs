//! vgeom - 3D vector geometry on the command line
//!
//! Rotates vectors about an axis, measures the angle between vectors and
//! finds a vector perpendicular to two others.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vgeom")]
#[command(author, version, about = "3D vector geometry helpers")]
#[command(long_about = "
Rotate a vector about an arbitrary axis, measure the angle between two
vectors, or compute a vector perpendicular to two others.

Vectors are written as x,y,z (brackets optional).

Examples:
  vgeom rotate 1,0,0 --angle 1.5708 --axis 0,0,1
  vgeom rotate 1,0,0 --angle 90 --axis 0,0,1 --degrees
  vgeom angle 1,0,0 0,1,0 --degrees
  vgeom perp 1,0,0 0,1,0
  RUST_LOG=debug vgeom angle 0,0,0 1,0,0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimal places in printed results
    #[arg(short, long, global = true, default_value = "6")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate a vector about an axis (Rodrigues' formula)
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Angle between two vectors, in [0, π]
    #[command(visible_alias = "a")]
    Angle(AngleArgs),

    /// Vector perpendicular to two vectors (cross product)
    #[command(visible_alias = "p")]
    Perp(PerpArgs),
}

/// Arguments for the `rotate` command.
#[derive(Args)]
struct RotateArgs {
    /// Vector to rotate (x,y,z)
    #[arg(allow_hyphen_values = true)]
    vector: String,

    /// Rotation angle (radians unless --degrees)
    #[arg(short, long, allow_negative_numbers = true)]
    angle: f64,

    /// Rotation axis (x,y,z), need not be unit length
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    axis: String,

    /// Interpret --angle in degrees
    #[arg(short, long)]
    degrees: bool,
}

/// Arguments for the `angle` command.
#[derive(Args)]
struct AngleArgs {
    /// First vector (x,y,z)
    #[arg(allow_hyphen_values = true)]
    vec1: String,

    /// Second vector (x,y,z)
    #[arg(allow_hyphen_values = true)]
    vec2: String,

    /// Print the angle in degrees
    #[arg(short, long)]
    degrees: bool,
}

/// Arguments for the `perp` command.
#[derive(Args)]
struct PerpArgs {
    /// First vector (x,y,z)
    #[arg(allow_hyphen_values = true)]
    vec1: String,

    /// Second vector (x,y,z)
    #[arg(allow_hyphen_values = true)]
    vec2: String,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Commands::Rotate(args) => commands::rotate::run(args, cli.precision)?,
        Commands::Angle(args) => commands::angle::run(args, cli.precision)?,
        Commands::Perp(args) => commands::perp::run(args, cli.precision)?,
    };
    println!("{}", output);

    Ok(())
}
