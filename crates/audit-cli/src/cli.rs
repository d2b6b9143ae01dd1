//! CLI argument definitions for the coverage audit.

use std::path::PathBuf;

use audit_model::{AnalysisOptions, DEFAULT_COVERAGE_THRESHOLD};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "commons-audit",
    version,
    about = "Audit data extracts against a catalog of critical features",
    long_about = "Audit a data commons extract against a catalog of critical features.\n\n\
                  Reports which critical fields are missing from the TSV extracts and\n\
                  how completely every column is populated."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full audit and write all report artifacts.
    Analyze(AnalyzeArgs),

    /// List the critical features of a catalog.
    Features(FeaturesArgs),

    /// List the columns of every TSV extract (reads header rows only).
    Inventory(InventoryArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Critical-feature catalog (comma-separated, with header row).
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,

    /// Directory containing the `.tsv` extracts.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Output directory for report files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Minimum non-null ratio (0.0-1.0) for a column to pass.
    #[arg(
        long = "threshold",
        value_name = "RATIO",
        default_value_t = DEFAULT_COVERAGE_THRESHOLD,
        value_parser = parse_threshold
    )]
    pub threshold: f64,

    /// Additional value treated as null, e.g. `NA` (repeatable).
    ///
    /// Empty and whitespace-only values are always null.
    #[arg(long = "null-marker", value_name = "TEXT")]
    pub null_markers: Vec<String>,

    /// Print the run summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// Critical-feature catalog (comma-separated, with header row).
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,
}

#[derive(Parser)]
pub struct InventoryArgs {
    /// Directory containing the `.tsv` extracts.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: PathBuf,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    AnalysisOptions::new(threshold)
        .map(|options| options.threshold)
        .map_err(|error| error.to_string())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
