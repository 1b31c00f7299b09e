use std::io::Write;

use tempfile::NamedTempFile;

use tidy_ingest::{IngestError, TextEncoding, detect_encoding};

#[test]
fn detects_utf8_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("a,b\n\u{e9},\u{4e2d}\n".as_bytes()).unwrap();
    assert_eq!(detect_encoding(file.path()).unwrap(), TextEncoding::Utf8);
}

#[test]
fn detects_latin1_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"a\n\xfc\xe9\n").unwrap();
    let encoding = detect_encoding(file.path()).unwrap();
    assert_eq!(encoding, TextEncoding::Latin1);
    assert_eq!(encoding.to_string(), "latin-1");
}

#[test]
fn missing_file_never_defaults() {
    let result = detect_encoding(std::path::Path::new("nonexistent.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
