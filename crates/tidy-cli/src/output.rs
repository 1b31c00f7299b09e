//! Writers for the cleaned table and the cleaning log.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use tidy_model::{Cell, CleaningLog, Table};
use tidy_transform::normalization::format_numeric;

/// Text written for a cell: absent cells are empty fields.
pub fn cell_field(cell: &Cell) -> Cow<'_, str> {
    match cell {
        Cell::Text(value) => Cow::Borrowed(value.as_str()),
        Cell::Numeric(value) => Cow::Owned(format_numeric(*value)),
        Cell::Absent => Cow::Borrowed(""),
    }
}

fn write_records<W: Write>(writer: &mut Writer<W>, table: &Table) -> csv::Result<()> {
    if table.column_count() == 0 {
        return Ok(());
    }
    writer.write_record(table.column_names())?;
    for index in 0..table.row_count() {
        if let Some(row) = table.row(index) {
            writer.write_record(row.into_iter().map(cell_field).map(Cow::into_owned))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Renders `table` as CSV text with a header row.
pub fn render_table_csv(table: &Table) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    write_records(&mut writer, table).context("render csv")?;
    let bytes = writer.into_inner().context("flush csv buffer")?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

/// Writes `table` to `path` as UTF-8 CSV.
pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    write_records(&mut writer, table).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.row_count(), "wrote cleaned table");
    Ok(())
}

/// Writes the cleaning log to `path` as pretty-printed JSON.
pub fn write_log_json(log: &CleaningLog, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, log)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tracing::info!(path = %path.display(), operations = log.len(), "wrote cleaning log");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_model::Column;

    #[test]
    fn absent_cells_render_empty() {
        let table = Table::from_columns(vec![
            Column::new("a", vec![Cell::Numeric(3.0), Cell::Absent]),
            Column::new("b", vec![Cell::text("x, y"), Cell::Numeric(2.5)]),
        ])
        .unwrap();
        let text = render_table_csv(&table).unwrap();
        assert_eq!(text, "a,b\n3,\"x, y\"\n,2.5\n");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(render_table_csv(&Table::new()).unwrap(), "");
    }
}
