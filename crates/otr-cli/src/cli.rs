//! CLI argument definitions for the OTR price comparison tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "otr-compare",
    version,
    about = "Compare new-car OTR prices between two locations",
    long_about = "Compare the On The Road (OTR) price of one model series and variant\n\
                  between two locations.\n\n\
                  Reads an XLSX or CSV price list with the columns 'Model Series', 'Varian',\n\
                  'Lokasi' and 'Harga OTR'. Results can be exported to XLSX, PDF, or CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the price dataset (.xlsx or .csv).
    #[arg(
        long = "dataset",
        value_name = "PATH",
        env = "OTR_DATASET",
        default_value = "harga_mobil_baru.xlsx",
        global = true
    )]
    pub dataset: PathBuf,

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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List model series with their variant counts.
    Models,

    /// List the variants offered for one model series.
    Variants(VariantsArgs),

    /// List every location in the dataset.
    Locations,

    /// Compare one variant's price between two locations.
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct VariantsArgs {
    /// Model series to list variants for.
    #[arg(value_name = "MODEL_SERIES")]
    pub model_series: String,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Model series (default: first in the dataset).
    #[arg(long = "model", value_name = "MODEL_SERIES")]
    pub model_series: Option<String>,

    /// Variant of the model series (default: its first variant).
    #[arg(long = "variant", value_name = "VARIANT")]
    pub variant: Option<String>,

    /// First location (default: DKI, else the first location).
    #[arg(long = "location-a", value_name = "LOCATION")]
    pub location_a: Option<String>,

    /// Second location (default: Jawa Barat, else the second location).
    #[arg(long = "location-b", value_name = "LOCATION")]
    pub location_b: Option<String>,

    /// Export the result to an XLSX spreadsheet.
    #[arg(long = "xlsx", value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Export the result to a PDF document.
    #[arg(long = "pdf", value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Export the result to a CSV file.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
