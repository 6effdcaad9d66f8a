use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecoindex",
    version,
    about = "Ecoindex environmental scoring CLI for web page metrics"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Reference dataset file overriding the embedded tables
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one page from metrics given on the command line
    Compute(ComputeCommand),
    /// Score pages from a metric file or a directory of metric files
    Batch(BatchCommand),
    /// Show provenance and contents of the active reference dataset
    Dataset,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GradeFloor {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

#[derive(Args)]
pub struct ComputeCommand {
    /// DOM node count
    #[arg(long)]
    pub nodes: u64,

    /// Transferred page size in kilobytes
    #[arg(long)]
    pub size: f64,

    /// Number of network requests
    #[arg(long)]
    pub requests: u64,

    /// URL to tag the result with
    #[arg(long)]
    pub url: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Lowest acceptable grade; anything worse trips the gate exit code
    #[arg(long, value_enum)]
    pub min_grade: Option<GradeFloor>,
}

#[derive(Args)]
pub struct BatchCommand {
    /// Metric file, or directory walked for *.json metric files
    pub path: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Lowest acceptable grade; anything worse trips the gate exit code
    #[arg(long, value_enum)]
    pub min_grade: Option<GradeFloor>,
}
