//! CSV ingestion for csv-tidy.
//!
//! This crate turns input files of unknown encoding into [`tidy_model::Table`]s.
//!
//! # Features
//!
//! - **Encoding Detection**: try utf-8, latin-1, iso-8859-1 and cp1252 in order
//! - **CSV Loading**: header row on line 1, configurable missing-value markers
//! - **Summaries**: row/column counts and missing values before cleaning
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tidy_ingest::{IngestOptions, detect_encoding, read_csv_table};
//!
//! let path = Path::new("data/sales.csv");
//! let encoding = detect_encoding(path)?;
//! let loaded = read_csv_table(path, &IngestOptions::default())?;
//! ```

mod csv_table;
mod encoding;
mod error;
mod summary;

// === Error Types ===
pub use error::{IngestError, Result};

// === Encoding ===
pub use encoding::{
    CANDIDATE_ENCODINGS, TextEncoding, detect_encoding, detect_encoding_bytes,
    read_to_string_detected,
};

// === CSV Reading ===
pub use csv_table::{DEFAULT_NULL_MARKERS, IngestOptions, LoadedCsv, read_csv_str, read_csv_table};

// === Summaries ===
pub use summary::{CsvSummary, summarize_csv};
