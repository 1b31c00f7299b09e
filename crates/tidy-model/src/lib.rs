//! Data model shared by the csv-tidy crates.
//!
//! - **table**: columnar [`Table`] of tagged [`Cell`] values
//! - **log**: the append-only [`CleaningLog`] audit trail
//! - **error**: [`TableError`] for schema lookups and invariant violations

pub mod error;
pub mod log;
pub mod table;

pub use error::{Result, TableError};
pub use log::{CleaningLog, CleaningLogEntry, Operation};
pub use table::{Cell, Column, ColumnType, Table};
