//! Pre-cleaning diagnostics for a single input file.

use std::path::Path;

use serde::{Serialize, Serializer};

use crate::csv_table::{IngestOptions, read_csv_table};
use crate::error::Result;

/// Shape and missing-value counts of a raw input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvSummary {
    pub file: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    /// Absent-cell count per original column name, in header order.
    #[serde(serialize_with = "serialize_counts")]
    pub missing_values: Vec<(String, usize)>,
}

impl CsvSummary {
    pub fn missing_for(&self, column: &str) -> Option<usize> {
        self.missing_values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, count)| *count)
    }
}

fn serialize_counts<S: Serializer>(counts: &[(String, usize)], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(name, count)| (name, count)))
}

/// Loads `path` and reports its shape before any cleaning is applied.
pub fn summarize_csv(path: &Path, options: &IngestOptions) -> Result<CsvSummary> {
    let loaded = read_csv_table(path, options)?;
    let table = loaded.table;
    Ok(CsvSummary {
        file: path.display().to_string(),
        rows: table.row_count(),
        columns: table.column_count(),
        column_names: table.columns().iter().map(|c| c.name.clone()).collect(),
        missing_values: table
            .columns()
            .iter()
            .map(|c| (c.name.clone(), c.missing_count()))
            .collect(),
    })
}
