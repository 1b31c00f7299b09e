use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidy_cli::types::RunResult;
use tidy_model::Operation;

pub fn print_summary(result: &RunResult, output: &Path, log: &Path) {
    println!("Output: {}", output.display());
    println!("Cleaning log: {}", log.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    for path in &result.files_processed {
        table.add_row(vec![
            Cell::new(path.display()),
            Cell::new("cleaned").fg(Color::Green),
            dim_cell("-"),
        ]);
    }
    for skipped in &result.files_skipped {
        table.add_row(vec![
            Cell::new(skipped.path.display()),
            Cell::new("skipped").fg(Color::Yellow),
            Cell::new(&skipped.reason),
        ]);
    }
    println!("{table}");

    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    let rows = [
        ("Files processed", result.files_processed.len()),
        ("Files skipped", result.files_skipped.len()),
        ("Rows", result.rows()),
        ("Columns", result.columns()),
        ("Values imputed", imputed_count(result)),
        (
            "Values clipped",
            detail_sum(result, Operation::OutlierTruncate, "values_clipped"),
        ),
    ];
    for (label, value) in rows {
        totals.add_row(vec![Cell::new(label), count_cell(value)]);
    }
    println!("{totals}");
}

fn imputed_count(result: &RunResult) -> usize {
    detail_sum(result, Operation::FillMissingNumeric, "missing_count")
        + detail_sum(result, Operation::FillMissingCategorical, "missing_count")
}

fn detail_sum(result: &RunResult, operation: Operation, key: &str) -> usize {
    result
        .log
        .entries_for(operation)
        .filter_map(|entry| entry.detail(key).and_then(serde_json::Value::as_u64))
        .map(|count| usize::try_from(count).unwrap_or(usize::MAX))
        .sum()
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
