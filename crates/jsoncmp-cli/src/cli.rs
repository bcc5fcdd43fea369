use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jsoncmp_sdk::Filter;

#[derive(Parser)]
#[command(
    name = "jsoncmp",
    about = "Structural JSON comparison with key-rename detection",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./jsoncmp.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum object nesting to descend into (0 for no limit)
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show two documents side by side with per-line status
    Diff(DiffArgs),
    /// Count differences per category
    Summary(PairArgs),
    /// Write a JSON comparison report
    Report(ReportArgs),
    /// Compare every JSON file shared by two directories
    Batch(BatchArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct PairArgs {
    pub old: PathBuf,
    pub new: PathBuf,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// Show only lines with this status (`all` to show everything)
    #[arg(long)]
    pub filter: Option<Filter>,
    #[arg(long, default_value = "both")]
    pub side: PaneSide,
    /// Width of each pane in columns
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PaneSide {
    Old,
    New,
    Both,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// Output path (defaults to a timestamped name in `report_dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchArgs {
    pub old_dir: PathBuf,
    pub new_dir: PathBuf,
    /// Write one report per paired file into this directory
    #[arg(long)]
    pub reports: Option<PathBuf>,
}
