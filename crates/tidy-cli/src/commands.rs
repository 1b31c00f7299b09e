use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use tidy_cli::operations::{
    clean_single_file, consolidate_files, detect_column_type, parse_column_dates,
    truncate_column_outliers,
};
use tidy_cli::pipeline::{RunOptions, process_files};
use tidy_cli::query::{read_cleaning_log, read_log_operations};
use tidy_cli::types::RunResult;
use tidy_ingest::{detect_encoding, summarize_csv};
use tidy_transform::standardize_column_name;

use crate::cli::ProcessArgs;
use crate::summary::print_summary;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_process(args: &ProcessArgs, options: &RunOptions) -> Result<RunResult> {
    process_files(&args.inputs, &args.output, &args.log, options)
}

pub fn print_process_summary(result: &RunResult, args: &ProcessArgs) {
    print_summary(result, &args.output, &args.log);
}

pub fn run_encoding_detection(file: &Path) -> Result<()> {
    let encoding = detect_encoding(file)?;
    println!("{encoding}");
    Ok(())
}

pub fn run_name_standardization(name: &str) {
    println!("{}", standardize_column_name(name));
}

/// Prints the column type, or a not-found message for an unknown column.
pub fn run_type_detection(file: &Path, column: &str, options: &RunOptions) -> Result<()> {
    println!("{}", detect_column_type(file, column, options)?);
    Ok(())
}

pub fn run_date_parsing(file: &Path, column: &str, options: &RunOptions) -> Result<()> {
    print_json(&parse_column_dates(file, column, options)?)
}

pub fn run_outlier_truncate(file: &Path, column: &str, options: &RunOptions) -> Result<()> {
    print_json(&truncate_column_outliers(file, column, options)?)
}

pub fn run_dataframe_cleaning(file: &Path, output: &Path, options: &RunOptions) -> Result<()> {
    print_json(&clean_single_file(file, output, options)?)
}

pub fn run_dataframe_consolidation(
    output: &Path,
    inputs: &[PathBuf],
    options: &RunOptions,
) -> Result<()> {
    print_json(&consolidate_files(output, inputs, options)?)
}

pub fn run_file_processing(
    output: &Path,
    log: &Path,
    inputs: &[PathBuf],
    options: &RunOptions,
) -> Result<()> {
    let result = process_files(inputs, output, log, options)?;
    print_json(&result.log)
}

pub fn run_cleaning_log(log: &Path) -> Result<()> {
    print_json(&read_cleaning_log(log))
}

pub fn run_get_operations(log: &Path) -> Result<()> {
    print_json(&read_log_operations(log))
}

pub fn run_csv_summary(file: &Path, options: &RunOptions) -> Result<()> {
    let summary = summarize_csv(file, &options.ingest)
        .with_context(|| format!("summarize {}", file.display()))?;
    print_json(&summary)
}
