//! csv-tidy command-line entry point.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tidy_cli::logging::{LogConfig, LogFormat, init_logging};
use tidy_cli::pipeline::{PipelineError, RunOptions};
use tidy_ingest::IngestOptions;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, NullArgs};
use crate::commands::{
    print_process_summary, run_cleaning_log, run_csv_summary, run_dataframe_cleaning,
    run_dataframe_consolidation, run_date_parsing, run_encoding_detection, run_file_processing,
    run_get_operations, run_name_standardization, run_outlier_truncate, run_process,
    run_type_detection,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = run_options_from_cli(&cli.nulls);
    let result = match &cli.command {
        Command::Process(args) => run_process(args, &options).map(|result| {
            print_process_summary(&result, args);
        }),
        Command::EncodingDetection { file } => run_encoding_detection(file),
        Command::NameStandardization { name } => {
            run_name_standardization(name);
            Ok(())
        }
        Command::TypeDetection { file, column } => run_type_detection(file, column, &options),
        Command::DateParsing { file, column } => run_date_parsing(file, column, &options),
        Command::OutlierTruncate { file, column } => run_outlier_truncate(file, column, &options),
        Command::DataframeCleaning { file, output } => {
            run_dataframe_cleaning(file, output, &options)
        }
        Command::DataframeConsolidation { output, inputs } => {
            run_dataframe_consolidation(output, inputs, &options)
        }
        Command::FileProcessing {
            output,
            log,
            inputs,
        } => run_file_processing(output, log, inputs, &options),
        Command::CleaningLog { log } => run_cleaning_log(log),
        Command::GetOperations { log } => run_get_operations(log),
        Command::CsvSummary { file } => run_csv_summary(file, &options),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            if let Some(PipelineError::EmptyInputSet) = error.downcast_ref::<PipelineError>() {
                tracing::error!("no valid input files could be loaded");
            }
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_options_from_cli(nulls: &NullArgs) -> RunOptions {
    let base = if nulls.no_default_nulls {
        IngestOptions::without_default_nulls()
    } else {
        IngestOptions::default()
    };
    let ingest = nulls
        .null_markers
        .iter()
        .fold(base, |options, marker| options.with_null_marker(marker.as_str()));
    RunOptions {
        ingest,
        ..RunOptions::default()
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
