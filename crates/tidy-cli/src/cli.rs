//! CLI argument definitions for csv-tidy.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tidy_cli::pipeline::{DEFAULT_LOG, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "csv-tidy",
    version,
    about = "Clean, normalize and consolidate CSV files",
    long_about = "Clean, normalize and consolidate CSV files.\n\n\
                  Detects encodings, standardizes column names, infers column types,\n\
                  imputes missing values, clips outliers and normalizes dates.\n\
                  Every operation is recorded in a JSON cleaning log."
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

    #[command(flatten)]
    pub nulls: NullArgs,
}

/// Which raw field values load as missing.
#[derive(Args)]
pub struct NullArgs {
    /// Additional value to treat as missing (repeatable).
    #[arg(long = "null-marker", value_name = "VALUE", global = true)]
    pub null_markers: Vec<String>,

    /// Only treat empty fields as missing (plus any --null-marker values).
    #[arg(long = "no-default-nulls", global = true)]
    pub no_default_nulls: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean and consolidate input files, writing a CSV and a cleaning log.
    Process(ProcessArgs),

    /// Print the detected encoding of a file.
    EncodingDetection {
        file: PathBuf,
    },

    /// Print the standardized form of a column name.
    NameStandardization {
        name: String,
    },

    /// Print the inferred type of a column (numeric, date or categorical).
    TypeDetection {
        file: PathBuf,
        column: String,
    },

    /// Print the normalized dates of a column as a JSON array.
    DateParsing {
        file: PathBuf,
        column: String,
    },

    /// Print percentile clipping bounds and extremes of a numeric column.
    OutlierTruncate {
        file: PathBuf,
        column: String,
    },

    /// Clean a single file and write the result.
    DataframeCleaning {
        file: PathBuf,
        #[arg(default_value = "cleaned_output.csv")]
        output: PathBuf,
    },

    /// Clean and consolidate several files into one CSV.
    DataframeConsolidation {
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Run the full pipeline and print the cleaning log.
    FileProcessing {
        output: PathBuf,
        log: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print a cleaning log.
    CleaningLog {
        log: PathBuf,
    },

    /// Print the operations recorded in a cleaning log.
    GetOperations {
        log: PathBuf,
    },

    /// Print shape and missing-value counts of a file before cleaning.
    CsvSummary {
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Input CSV files.
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path of the cleaned, consolidated CSV.
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path of the JSON cleaning log.
    #[arg(short = 'l', long = "log", default_value = DEFAULT_LOG)]
    pub log: PathBuf,
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
