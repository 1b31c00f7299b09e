//! Merging of normalized tables into one.

use std::collections::BTreeSet;

use serde_json::json;

use tidy_model::{Cell, CleaningLog, Column, Operation, Table, TableError};

/// Unions the columns of `tables` and stacks their rows in input order.
///
/// Output columns are sorted by name so the schema does not depend on input
/// order. A table lacking a column contributes [`Cell::Absent`] for each of its
/// rows. Cells keep their own variants; a column that is numeric in one table
/// and text in another is not re-typed.
///
/// One `consolidate` entry is logged. An empty input yields an empty table and
/// no entry.
pub fn consolidate(tables: Vec<Table>, log: &mut CleaningLog) -> Result<Table, TableError> {
    if tables.is_empty() {
        return Ok(Table::new());
    }

    let names: BTreeSet<String> = tables
        .iter()
        .flat_map(|table| table.columns().iter().map(|c| c.name.clone()))
        .collect();
    let total_rows: usize = tables.iter().map(Table::row_count).sum();
    let total_dataframes = tables.len();

    let mut merged: Vec<Column> = names
        .iter()
        .map(|name| Column::new(name.clone(), Vec::with_capacity(total_rows)))
        .collect();

    for table in tables {
        let rows = table.row_count();
        let mut owned = table.into_columns();
        for target in &mut merged {
            match owned.iter_mut().find(|c| c.name == target.name) {
                Some(source) => target.cells.append(&mut source.cells),
                None => target.cells.extend(std::iter::repeat_n(Cell::Absent, rows)),
            }
        }
    }

    let table = Table::from_columns(merged)?;
    log.record(
        Operation::Consolidate,
        json!({
            "total_dataframes": total_dataframes,
            "total_rows": table.row_count(),
            "total_columns": table.column_count(),
        }),
    );
    tracing::debug!(
        tables = total_dataframes,
        rows = table.row_count(),
        columns = table.column_count(),
        "consolidated tables"
    );
    Ok(table)
}
