//! Integration tests for the single-operation subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use tidy_cli::operations::{
    clean_single_file, consolidate_files, detect_column_type, parse_column_dates,
    truncate_column_outliers,
};
use tidy_cli::pipeline::RunOptions;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const ORDERS: &str = "Order ID,Order Date,Total Amount\n\
                      ORD1,01/02/2023,10\n\
                      ORD2,,20\n\
                      ORD3,not a date,30\n\
                      ORD4,2023-03-04,10000\n";

#[test]
fn type_detection_reports_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let options = RunOptions::default();
    assert_eq!(detect_column_type(&path, "Total Amount", &options).unwrap(), "numeric");
    assert_eq!(detect_column_type(&path, "Order ID", &options).unwrap(), "categorical");
}

#[test]
fn type_detection_unknown_column_is_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let message = detect_column_type(&path, "NonExistent", &RunOptions::default()).unwrap();
    assert_eq!(message, "Error: column 'NonExistent' not found");
}

#[test]
fn date_parsing_emits_null_for_missing_and_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let dates = parse_column_dates(&path, "Order Date", &RunOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_value(&dates).unwrap(),
        json!(["2023-02-01", null, null, "2023-03-04"])
    );
}

#[test]
fn outlier_truncate_reports_extremes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let report = truncate_column_outliers(&path, "Total Amount", &RunOptions::default()).unwrap();
    let value = serde_json::to_value(report).unwrap();
    for key in ["lower_bound", "upper_bound", "original_min", "original_max", "clipped_min", "clipped_max"] {
        assert!(value.get(key).is_some_and(Value::is_number), "{key}");
    }
    assert_eq!(value["original_max"], json!(10000.0));
    assert!(value["clipped_max"].as_f64().unwrap() < 10000.0);
}

#[test]
fn missing_column_is_an_error_for_value_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let error = parse_column_dates(&path, "Nope", &RunOptions::default()).unwrap_err();
    assert!(error.to_string().contains("not found"));
}

#[test]
fn cleaning_describes_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "orders.csv", ORDERS);
    let output = dir.path().join("cleaned.csv");
    let summary = clean_single_file(&path, &output, &RunOptions::default()).unwrap();
    assert!(output.exists());
    assert_eq!(summary["rows"], json!(4));
    assert_eq!(summary["columns"], json!(3));
    assert_eq!(
        summary["column_names"],
        json!(["order_id", "order_date", "total_amount"])
    );
}

#[test]
fn consolidation_counts_loaded_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(dir.path(), "orders.csv", ORDERS);
    let second = write_file(dir.path(), "more.csv", "Order ID,Status\nORD9,Shipped\n");
    let missing = dir.path().join("missing.csv");
    let output = dir.path().join("all.csv");
    let summary =
        consolidate_files(&output, &[first, missing, second], &RunOptions::default()).unwrap();
    assert_eq!(summary["input_files_count"], json!(2));
    assert_eq!(summary["total_rows"], json!(5));
    assert_eq!(summary["total_columns"], json!(4));
    assert_eq!(summary["output_file"], json!(output.display().to_string()));
}
