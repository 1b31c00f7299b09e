use std::io::Write;

use tempfile::NamedTempFile;

use tidy_ingest::{IngestError, IngestOptions, TextEncoding, read_csv_table, summarize_csv};
use tidy_model::Cell;

fn temp_csv(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write file");
    file
}

#[test]
fn loads_utf8_file() {
    let file = temp_csv(b"Order ID,Status\nORD1,Shipped\nORD2,\n");
    let loaded = read_csv_table(file.path(), &IngestOptions::default()).expect("read csv");
    assert_eq!(loaded.encoding, TextEncoding::Utf8);
    assert_eq!(loaded.table.column_names(), vec!["Order ID", "Status"]);
    assert_eq!(loaded.table.row_count(), 2);
    assert_eq!(
        loaded.table.column("Status").unwrap().cells,
        vec![Cell::text("Shipped"), Cell::Absent]
    );
}

#[test]
fn loads_latin1_file() {
    let file = temp_csv(b"Supplier\nCaf\xe9 Ltd\n");
    let loaded = read_csv_table(file.path(), &IngestOptions::default()).expect("read csv");
    assert_eq!(loaded.encoding, TextEncoding::Latin1);
    assert_eq!(
        loaded.table.column("Supplier").unwrap().cells,
        vec![Cell::text("Caf\u{e9} Ltd")]
    );
}

#[test]
fn strips_utf8_bom_from_header() {
    let file = temp_csv(b"\xef\xbb\xbfName,Age\nAda,36\n");
    let loaded = read_csv_table(file.path(), &IngestOptions::default()).expect("read csv");
    assert_eq!(loaded.table.column_names(), vec!["Name", "Age"]);
}

#[test]
fn missing_file_is_not_found() {
    let result = read_csv_table(
        std::path::Path::new("tests/definitely_missing.csv"),
        &IngestOptions::default(),
    );
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn summary_counts_missing_per_original_column() {
    let file = temp_csv(b"Product Price $,Status\n10.5,\n,Pending\n,NA\n");
    let summary = summarize_csv(file.path(), &IngestOptions::default()).expect("summary");
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 2);
    assert_eq!(summary.column_names, vec!["Product Price $", "Status"]);
    assert_eq!(summary.missing_for("Product Price $"), Some(2));
    assert_eq!(summary.missing_for("Status"), Some(2));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["missing_values"]["Product Price $"], 2);
    assert_eq!(json["rows"], 3);
}
