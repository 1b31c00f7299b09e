//! Multi-file cleaning pipeline.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: detect the encoding and read each input CSV
//! 2. **Normalize**: standardize names, classify and clean every column
//! 3. **Consolidate**: union the columns and stack the rows of all tables
//! 4. **Output**: write the cleaned CSV and the JSON cleaning log
//!
//! Files that are missing or fail to load are skipped with a warning and never
//! appear in the cleaning log. The run only fails when no file survives.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, info_span, warn};

use tidy_ingest::{IngestOptions, read_csv_table};
use tidy_model::{CleaningLog, Table};
use tidy_transform::{NormalizeOptions, consolidate, normalize_table};

use crate::output::{write_log_json, write_table_csv};
use crate::types::{RunResult, SkippedFile};

/// Default path of the cleaned table.
pub const DEFAULT_OUTPUT: &str = "cleaned_data.csv";
/// Default path of the cleaning log.
pub const DEFAULT_LOG: &str = "data_cleaning_log.json";

/// Whole-run failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Every input was missing or failed to load.
    #[error("no valid input files to process")]
    EmptyInputSet,
}

/// Options shared by every pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ingest: IngestOptions,
    pub normalize: NormalizeOptions,
}

/// Loads and normalizes a single file, appending to `log`.
pub fn clean_file(path: &Path, options: &RunOptions, log: &mut CleaningLog) -> Result<Table> {
    let loaded = read_csv_table(path, &options.ingest)?;
    let source = path.display().to_string();
    let table = normalize_table(loaded.table, &source, &options.normalize, log)
        .with_context(|| format!("normalize {source}"))?;
    Ok(table)
}

/// Cleans each input in order and consolidates the survivors.
///
/// Returns [`PipelineError::EmptyInputSet`] when nothing could be loaded.
pub fn clean_files(inputs: &[PathBuf], options: &RunOptions) -> Result<RunResult> {
    let mut log = CleaningLog::new();
    let mut tables = Vec::with_capacity(inputs.len());
    let mut files_processed = Vec::new();
    let mut files_skipped = Vec::new();

    for path in inputs {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();
        if !path.exists() {
            warn!("file does not exist, skipping");
            files_skipped.push(SkippedFile {
                path: path.clone(),
                reason: "file does not exist".to_string(),
            });
            continue;
        }
        let start = Instant::now();
        match clean_file(path, options, &mut log) {
            Ok(table) => {
                info!(
                    rows = table.row_count(),
                    columns = table.column_count(),
                    duration_ms = start.elapsed().as_millis(),
                    "cleaned file"
                );
                files_processed.push(path.clone());
                tables.push(table);
            }
            Err(error) => {
                warn!(error = %format!("{error:#}"), "failed to load file, skipping");
                files_skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: format!("{error:#}"),
                });
            }
        }
    }

    if tables.is_empty() {
        return Err(PipelineError::EmptyInputSet.into());
    }
    let table = consolidate(tables, &mut log).context("consolidate tables")?;
    Ok(RunResult {
        table,
        log,
        files_processed,
        files_skipped,
    })
}

/// Runs the full pipeline and writes both outputs.
pub fn process_files(
    inputs: &[PathBuf],
    output: &Path,
    log_path: &Path,
    options: &RunOptions,
) -> Result<RunResult> {
    let result = clean_files(inputs, options)?;
    write_table_csv(&result.table, output)?;
    write_log_json(&result.log, log_path)?;
    Ok(result)
}
