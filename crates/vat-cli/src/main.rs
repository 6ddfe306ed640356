//! vat - Axis and quaternion remapper for vertex animation texture bakes
//!
//! Converts positions, packed vectors and rotations between axis conventions.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Kind;

#[derive(Parser)]
#[command(name = "vat")]
#[command(author, version, about = "Axis/quaternion remapper for VAT bakes")]
#[command(long_about = "
Remaps vectors and quaternions between engine axis conventions using the
swizzle (0-5) and flip (0-7, quaternions 0-14) codes stored in bake settings.

Examples:
  vat vec3 1,2,3 -s 3 -f 1              # -> -2,3,1
  vat vec4 1,2,3,4 -s 5 -f 6            # z and w pass through
  vat quat 0,0.707,0,0.707 -f 12
  vat file points.txt -o out.txt --kind vec3 -s 4 -f 0
  vat file - -o - --kind quat -f 9      # stdin to stdout
  vat batch 'frames/*.csv' -o remapped --kind vec3 -s 3 -f 1
  vat tables --json
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
}

#[derive(Subcommand)]
enum Commands {
    /// Remap a single 3-vector
    #[command(visible_alias = "v3")]
    Vec3(Vec3Args),

    /// Remap x and y of a single 4-vector (z and w pass through)
    #[command(visible_alias = "v4")]
    Vec4(Vec4Args),

    /// Flip quaternion component signs
    #[command(visible_alias = "q")]
    Quat(QuatArgs),

    /// Remap every vector in a text file (one per line)
    #[command(visible_alias = "f")]
    File(FileArgs),

    /// Remap every file matching a glob pattern into a directory
    Batch(BatchArgs),

    /// Print swizzle and flip code tables
    #[command(visible_alias = "t")]
    Tables(TablesArgs),
}

/// Arguments for the `vec3` command.
#[derive(Args)]
struct Vec3Args {
    /// Components as x,y,z
    #[arg(allow_hyphen_values = true)]
    coord: String,

    /// Swizzle code (0-5)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    swizzle: i32,

    /// Flip code (0-7)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    flip: i32,
}

/// Arguments for the `vec4` command.
#[derive(Args)]
struct Vec4Args {
    /// Components as x,y,z,w
    #[arg(allow_hyphen_values = true)]
    coord: String,

    /// Swizzle code (0-5)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    swizzle: i32,

    /// Flip code (0-7)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    flip: i32,
}

/// Arguments for the `quat` command.
#[derive(Args)]
struct QuatArgs {
    /// Components as x,y,z,w
    #[arg(allow_hyphen_values = true)]
    src: String,

    /// Quaternion flip code (0-14)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    flip: i32,
}

/// Arguments for the `file` command.
#[derive(Args)]
struct FileArgs {
    /// Input text file, or - for stdin
    input: PathBuf,

    /// Output text file, or - for stdout
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// What each line holds: vec3, vec4, quat
    #[arg(short, long, value_enum, default_value = "vec3")]
    kind: Kind,

    /// Swizzle code (0-5), ignored for quat
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    swizzle: i32,

    /// Flip code (0-7, quat 0-14)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    flip: i32,
}

/// Arguments for the `batch` command.
#[derive(Args)]
struct BatchArgs {
    /// Input glob pattern (e.g., "frames/*.csv")
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// What each line holds: vec3, vec4, quat
    #[arg(short, long, value_enum, default_value = "vec3")]
    kind: Kind,

    /// Swizzle code (0-5), ignored for quat
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    swizzle: i32,

    /// Flip code (0-7, quat 0-14)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    flip: i32,
}

/// Arguments for the `tables` command.
#[derive(Args)]
struct TablesArgs {
    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Vec3(args) => commands::remap::run_vec3(args, cli.verbose),
        Commands::Vec4(args) => commands::remap::run_vec4(args, cli.verbose),
        Commands::Quat(args) => commands::remap::run_quat(args, cli.verbose),
        Commands::File(args) => commands::file::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Tables(args) => commands::tables::run(args),
    }
}
