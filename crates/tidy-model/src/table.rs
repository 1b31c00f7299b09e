//! Columnar table representation.
//!
//! A [`Table`] is an ordered list of named [`Column`]s that all share the same
//! length. Cells start out as raw text or [`Cell::Absent`] and only become
//! [`Cell::Numeric`] once a column has been classified.

#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A single value in a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    /// Original textual payload as read from the source.
    Text(String),
    /// Parsed numeric value, only produced for columns classified as numeric.
    Numeric(f64),
    /// No value supplied for this row. Distinct from an empty string.
    Absent,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            _ => None,
        }
    }
}

/// Classified type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Date,
    Categorical,
}

impl ColumnType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a column of `len` absent cells.
    pub fn absent(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, vec![Cell::Absent; len])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_absent()).count()
    }

    /// Iterates the cells that carry a value.
    pub fn present(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_absent())
    }
}

/// Ordered collection of equal-length columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Appends a column, keeping the equal-length and unique-name invariants.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|existing| existing.name == column.name) {
            return Err(TableError::DuplicateColumn {
                column: column.name,
            });
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            let actual = column.len();
            return Err(TableError::LengthMismatch {
                column: column.name,
                expected: self.row_count,
                actual,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| TableError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Returns the row at `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| &column.cells[index])
                .collect(),
        )
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}
