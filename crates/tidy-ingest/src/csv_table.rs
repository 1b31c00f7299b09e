use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use tidy_model::{Cell, Column, Table};

use crate::encoding::{TextEncoding, read_to_string_detected};
use crate::error::{IngestError, Result};

/// Raw forms that load as [`Cell::Absent`] unless configured otherwise.
///
/// The empty field is always absent; the rest are common spreadsheet and
/// dataframe export markers.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "<NA>",
];

/// Options controlling how raw CSV fields become cells.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Exact (post-trim) field values treated as absent.
    pub null_markers: Vec<String>,
    /// Trim surrounding whitespace from every field.
    pub trim_cells: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            trim_cells: true,
        }
    }
}

impl IngestOptions {
    /// Options where only the empty field is absent.
    #[must_use]
    pub fn without_default_nulls() -> Self {
        Self {
            null_markers: vec![String::new()],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_null_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !self.null_markers.contains(&marker) {
            self.null_markers.push(marker);
        }
        self
    }

    pub fn is_null(&self, value: &str) -> bool {
        value.is_empty() || self.null_markers.iter().any(|marker| marker == value)
    }

    fn to_cell(&self, raw: &str) -> Cell {
        let value = if self.trim_cells { raw.trim() } else { raw };
        if self.is_null(value) {
            Cell::Absent
        } else {
            Cell::text(value)
        }
    }
}

/// A table loaded from disk together with how it was decoded.
#[derive(Debug, Clone)]
pub struct LoadedCsv {
    pub source: PathBuf,
    pub encoding: TextEncoding,
    pub table: Table,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Makes header names unique: blanks become `Unnamed: <index>` and repeats get
/// a `.<n>` suffix, so every original label maps to exactly one column.
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());
    for (idx, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.push(candidate);
    }
    seen
}

/// Parses CSV text whose first record is the header row.
///
/// Short rows are padded with [`Cell::Absent`]; a row with more fields than
/// the header is a [`IngestError::CsvParse`]. `source` is used only for error
/// messages.
pub fn read_csv_str(text: &str, source: &Path, options: &IngestOptions) -> Result<Table> {
    let csv_error = |e: csv::Error| IngestError::CsvParse {
        path: source.to_path_buf(),
        message: e.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if raw_headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    let headers = dedupe_headers(raw_headers);

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.len() > headers.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: source.to_path_buf(),
                message: format!(
                    "line {line}: expected {} fields, saw {}",
                    headers.len(),
                    record.len()
                ),
            });
        }
        for (idx, column) in cells.iter_mut().enumerate() {
            let cell = record
                .get(idx)
                .map_or(Cell::Absent, |raw| options.to_cell(raw));
            column.push(cell);
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Table::from_columns(columns)?)
}

/// Loads a CSV file, detecting its encoding first.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<LoadedCsv> {
    let (text, encoding) = read_to_string_detected(path)?;
    let table = read_csv_str(&text, path, options)?;
    tracing::debug!(
        path = %path.display(),
        encoding = encoding.label(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded csv"
    );
    Ok(LoadedCsv {
        source: path.to_path_buf(),
        encoding,
        table,
    })
}
