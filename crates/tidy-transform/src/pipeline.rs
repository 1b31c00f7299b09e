//! Per-table normalization.
//!
//! [`normalize_table`] runs every cleaning step over one loaded table in a
//! fixed order and records each decision in the [`CleaningLog`]:
//!
//! 1. `load_file` with the source identifier and the raw shape
//! 2. `standardize_columns` with the full header mapping
//! 3. per column, in column order: classify, then
//!    - numeric: coerce, fill with the median, clip to the percentile bounds
//!    - date: rewrite as `YYYY-MM-DD`
//!    - categorical: fill with the placeholder
//!
//! The median is taken before clipping, so extreme values still pull on it.

use serde_json::json;

use tidy_model::{CleaningLog, Column, ColumnType, Operation, Table, TableError};

use crate::inference::classify_column;
use crate::names::ColumnNameMapping;
use crate::normalization::{
    clip_outliers, coerce_numeric, fill_missing_categorical, fill_missing_numeric,
    normalize_date_column,
};
use crate::options::NormalizeOptions;

/// Cleans one column in place according to its classified type.
///
/// Returns the type the column was classified as.
pub fn normalize_column(
    column: &mut Column,
    options: &NormalizeOptions,
    log: &mut CleaningLog,
) -> ColumnType {
    let column_type = classify_column(column, options);
    tracing::debug!(column = %column.name, column_type = %column_type, "classified column");
    match column_type {
        ColumnType::Numeric => {
            coerce_numeric(column);
            fill_missing_numeric(column, log);
            clip_outliers(column, options.lower_quantile, options.upper_quantile, log);
        }
        ColumnType::Date => {
            normalize_date_column(column, log);
        }
        ColumnType::Categorical => {
            fill_missing_categorical(column, &options.categorical_fill, log);
        }
    }
    column_type
}

/// Normalizes a loaded table.
///
/// `source` identifies where the table came from (usually the input path) and
/// is only used in log entries.
pub fn normalize_table(
    table: Table,
    source: &str,
    options: &NormalizeOptions,
    log: &mut CleaningLog,
) -> Result<Table, TableError> {
    log.record(
        Operation::LoadFile,
        json!({
            "source": source,
            "rows": table.row_count(),
            "columns": table.column_count(),
        }),
    );

    let mapping = ColumnNameMapping::from_headers(table.column_names());
    log.record(
        Operation::StandardizeColumns,
        json!({
            "source": source,
            "mappings": mapping.to_json(),
        }),
    );

    let mut columns = table.into_columns();
    for (column, (_, standardized)) in columns.iter_mut().zip(mapping.pairs()) {
        column.name.clone_from(standardized);
        normalize_column(column, options, log);
    }

    Table::from_columns(columns)
}
