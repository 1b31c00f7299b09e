//! End-to-end normalization of in-memory tables.

use proptest::prelude::*;
use serde_json::json;
use tidy_model::{Cell, CleaningLog, Column, ColumnType, Operation, Table};
use tidy_transform::{
    NormalizeOptions, classify_table_column, clip_outliers, consolidate, normalize_table,
};

fn column(name: &str, values: &[&str]) -> Column {
    let cells = values
        .iter()
        .map(|v| if v.is_empty() { Cell::Absent } else { Cell::text(*v) })
        .collect();
    Column::new(name, cells)
}

fn sales_table() -> Table {
    Table::from_columns(vec![
        column("Order ID", &["ORD1000", "ORD1001", "ORD1002"]),
        column("Customer Name", &["Alice", "", "Carol"]),
        column("Order Date", &["01/02/2023", "2023-03-04", "15 Mar 2023"]),
        column("Product Price $", &["10.5", "", "30"]),
        column("Quantity!!", &["1", "2", "3"]),
        column("Total Amount", &["10.5", "40", "90"]),
        column("Ship Date", &["03/02/2023", "not yet", "20/03/2023"]),
        column("Status", &["Shipped", "Pending", ""]),
    ])
    .unwrap()
}

#[test]
fn sales_table_fills_product_price() {
    let mut log = CleaningLog::new();
    let out = normalize_table(sales_table(), "sales.csv", &NormalizeOptions::default(), &mut log)
        .unwrap();

    let price = out.column("product_price").unwrap();
    assert_eq!(price.missing_count(), 0);
    assert_eq!(price.cells[1], Cell::Numeric(20.25));

    let fills: Vec<_> = log.entries_for(Operation::FillMissingNumeric).collect();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].detail("column"), Some(&json!("product_price")));
    assert_eq!(fills[0].detail("missing_count"), Some(&json!(1)));
}

#[test]
fn sales_table_columns_are_typed() {
    let mut log = CleaningLog::new();
    let out = normalize_table(sales_table(), "sales.csv", &NormalizeOptions::default(), &mut log)
        .unwrap();

    assert_eq!(
        out.column_names(),
        vec![
            "order_id",
            "customer_name",
            "order_date",
            "product_price",
            "quantity",
            "total_amount",
            "ship_date",
            "status",
        ]
    );
    assert_eq!(
        out.column("order_date").unwrap().cells,
        vec![
            Cell::text("2023-02-01"),
            Cell::text("2023-03-04"),
            Cell::text("2023-03-15"),
        ]
    );
    // Unparseable dates stay absent; date columns are never imputed.
    assert_eq!(out.column("ship_date").unwrap().cells[1], Cell::Absent);
    assert_eq!(out.column("status").unwrap().cells[2], Cell::text("Unknown"));
    assert_eq!(out.column("customer_name").unwrap().cells[1], Cell::text("Unknown"));
    assert_eq!(log.entries_for(Operation::FormatDates).count(), 2);
    assert_eq!(log.entries_for(Operation::LoadFile).count(), 1);
}

#[test]
fn unknown_column_is_not_found() {
    let err = classify_table_column(&sales_table(), "missing", &NormalizeOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn classify_reference_columns() {
    let table = Table::from_columns(vec![
        column("n", &["1", "2.5", "-3"]),
        column("s", &["Shipped", "Pending", ""]),
    ])
    .unwrap();
    let options = NormalizeOptions::default();
    assert_eq!(classify_table_column(&table, "n", &options).unwrap(), ColumnType::Numeric);
    assert_eq!(classify_table_column(&table, "s", &options).unwrap(), ColumnType::Categorical);
}

#[test]
fn consolidated_rows_sum_inputs() {
    let mut log = CleaningLog::new();
    let options = NormalizeOptions::default();
    let first = Table::from_columns(vec![column("A", &["1", "2"]), column("B", &["x", "y"])]).unwrap();
    let second = Table::from_columns(vec![column("A", &["3"]), column("C", &["z"])]).unwrap();
    let first = normalize_table(first, "one.csv", &options, &mut log).unwrap();
    let second = normalize_table(second, "two.csv", &options, &mut log).unwrap();

    let merged = consolidate(vec![first, second], &mut log).unwrap();
    assert_eq!(merged.row_count(), 3);
    assert_eq!(merged.column_names(), vec!["a", "b", "c"]);
    assert_eq!(merged.column("b").unwrap().cells[2], Cell::Absent);
    assert_eq!(merged.column("c").unwrap().cells[0], Cell::Absent);
    assert_eq!(
        log.entries().last().map(|e| e.operation()),
        Some(Operation::Consolidate)
    );
}

proptest! {
    #[test]
    fn clipping_stays_within_original_range(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
        let mut col = Column::new("v", values.iter().map(|v| Cell::Numeric(*v)).collect());
        let mut log = CleaningLog::new();
        let report = clip_outliers(&mut col, 0.01, 0.99, &mut log).unwrap();
        prop_assert!(report.clipped_max <= report.original_max);
        prop_assert!(report.clipped_min >= report.original_min);
        prop_assert_eq!(log.is_empty(), report.values_clipped == 0);
        for cell in &col.cells {
            let v = cell.as_f64().unwrap();
            prop_assert!(v >= report.lower_bound && v <= report.upper_bound);
        }
    }
}
