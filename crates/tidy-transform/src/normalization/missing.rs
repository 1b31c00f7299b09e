//! Missing-value imputation by classified type.
//!
//! - numeric columns take the median of their present values
//! - categorical columns take a fixed placeholder (`Unknown` by default)
//! - date columns are never imputed

use serde_json::json;

use tidy_model::{Cell, CleaningLog, Column, Operation};

use super::numeric::{median, numeric_values};

/// Replaces absent cells of a numeric column with the column median.
///
/// Returns the fill value when at least one cell was filled. Logs
/// `fill_missing_numeric` only in that case. A column with no values at all
/// has no median and is left as is.
pub fn fill_missing_numeric(column: &mut Column, log: &mut CleaningLog) -> Option<f64> {
    let missing_count = column.missing_count();
    if missing_count == 0 {
        return None;
    }
    let fill_value = median(&numeric_values(column))?;
    for cell in &mut column.cells {
        if cell.is_absent() {
            *cell = Cell::Numeric(fill_value);
        }
    }
    log.record(
        Operation::FillMissingNumeric,
        json!({
            "column": column.name,
            "fill_value": fill_value,
            "missing_count": missing_count,
        }),
    );
    tracing::debug!(column = %column.name, fill_value, missing_count, "filled numeric");
    Some(fill_value)
}

/// Replaces absent cells of a categorical column with `fill_value`.
///
/// Returns the number of cells filled; logs `fill_missing_categorical` only
/// when that is non-zero.
pub fn fill_missing_categorical(column: &mut Column, fill_value: &str, log: &mut CleaningLog) -> usize {
    let missing_count = column.missing_count();
    if missing_count == 0 {
        return 0;
    }
    for cell in &mut column.cells {
        if cell.is_absent() {
            *cell = Cell::text(fill_value);
        }
    }
    log.record(
        Operation::FillMissingCategorical,
        json!({
            "column": column.name,
            "fill_value": fill_value,
            "missing_count": missing_count,
        }),
    );
    tracing::debug!(column = %column.name, missing_count, "filled categorical");
    missing_count
}
