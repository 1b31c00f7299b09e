use std::path::PathBuf;

use tidy_model::{CleaningLog, Table};

/// Outcome of cleaning and consolidating a set of input files.
#[derive(Debug)]
pub struct RunResult {
    pub table: Table,
    pub log: CleaningLog,
    pub files_processed: Vec<PathBuf>,
    pub files_skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl RunResult {
    pub fn rows(&self) -> usize {
        self.table.row_count()
    }

    pub fn columns(&self) -> usize {
        self.table.column_count()
    }
}
