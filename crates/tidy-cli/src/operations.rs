//! Single-operation queries behind the inspection subcommands.
//!
//! Each function does the work of one subcommand and returns what it prints,
//! leaving the printing itself to the binary.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde_json::{Value, json};

use tidy_ingest::read_csv_table;
use tidy_model::{CleaningLog, Column, TableError};
use tidy_transform::normalization::coerce_numeric;
use tidy_transform::{ClipReport, classify_column, clip_outliers, normalize_date};

use crate::output::write_table_csv;
use crate::pipeline::{RunOptions, clean_file, clean_files};

/// Loads `file` and takes ownership of the raw column `name`.
fn load_column(file: &Path, name: &str, options: &RunOptions) -> Result<Column> {
    let loaded = read_csv_table(file, &options.ingest)?;
    let position = loaded
        .table
        .columns()
        .iter()
        .position(|column| column.name == name)
        .ok_or_else(|| TableError::ColumnNotFound {
            column: name.to_string(),
        })?;
    Ok(loaded.table.into_columns().swap_remove(position))
}

/// Classified type of a raw column, or `Error: ...` when it does not exist.
///
/// An unknown column is a message, not a failure.
pub fn detect_column_type(file: &Path, column: &str, options: &RunOptions) -> Result<String> {
    let loaded = read_csv_table(file, &options.ingest)?;
    Ok(match loaded.table.column(column) {
        Ok(found) => classify_column(found, &options.normalize).to_string(),
        Err(error) => format!("Error: {error}"),
    })
}

/// Normalized dates of a raw column; `None` for absent or unparseable values.
pub fn parse_column_dates(
    file: &Path,
    column: &str,
    options: &RunOptions,
) -> Result<Vec<Option<String>>> {
    let column = load_column(file, column, options)?;
    Ok(column
        .cells
        .iter()
        .map(|cell| cell.as_text().and_then(normalize_date))
        .collect())
}

/// Clipping bounds and extremes of a raw column after numeric coercion.
pub fn truncate_column_outliers(
    file: &Path,
    column: &str,
    options: &RunOptions,
) -> Result<ClipReport> {
    let mut column = load_column(file, column, options)?;
    coerce_numeric(&mut column);
    let mut log = CleaningLog::new();
    clip_outliers(
        &mut column,
        options.normalize.lower_quantile,
        options.normalize.upper_quantile,
        &mut log,
    )
    .ok_or_else(|| anyhow!("column '{}' has no numeric values", column.name))
}

/// Cleans one file into `output` and describes the written table.
pub fn clean_single_file(file: &Path, output: &Path, options: &RunOptions) -> Result<Value> {
    let mut log = CleaningLog::new();
    let table = clean_file(file, options, &mut log)?;
    write_table_csv(&table, output)?;
    Ok(json!({
        "output_file": output.display().to_string(),
        "rows": table.row_count(),
        "columns": table.column_count(),
        "column_names": table.column_names(),
    }))
}

/// Cleans and consolidates `inputs` into `output` and describes the result.
pub fn consolidate_files(output: &Path, inputs: &[PathBuf], options: &RunOptions) -> Result<Value> {
    let result = clean_files(inputs, options)?;
    write_table_csv(&result.table, output)?;
    Ok(json!({
        "output_file": output.display().to_string(),
        "input_files_count": result.files_processed.len(),
        "total_rows": result.rows(),
        "total_columns": result.columns(),
    }))
}
