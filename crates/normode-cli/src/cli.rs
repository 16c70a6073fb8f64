use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "normode - extract the final geometry and vibrational normal modes from a quantum-chemistry report and export looping displacement animations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the vibrational modes found in a report.
    Modes(ModesArgs),
    /// Animate one vibrational mode and write the frames as a multi-frame XYZ file.
    Animate(AnimateArgs),
}

/// Arguments for the `modes` subcommand.
#[derive(Args, Debug)]
pub struct ModesArgs {
    /// Path to the calculation report.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for the `animate` subcommand.
#[derive(Args, Debug)]
pub struct AnimateArgs {
    // --- Core Arguments ---
    /// Path to the calculation report.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Zero-based index of the mode to animate, in report order.
    #[arg(short, long, required = true, value_name = "INDEX")]
    pub mode: usize,

    /// Path for the output XYZ trajectory.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Animation Overrides ---
    /// Override the number of frames from rest to full displacement.
    #[arg(long, value_name = "INT")]
    pub steps: Option<usize>,

    /// Override the displacement exaggeration factor (may be negative).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub scale: Option<f64>,

    /// Number of full there-and-back cycles to write.
    #[arg(long, value_name = "INT", default_value_t = 1)]
    pub cycles: usize,

    /// Do not infer or export connections.
    #[arg(long)]
    pub no_connections: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S bonds-per-type.S=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
