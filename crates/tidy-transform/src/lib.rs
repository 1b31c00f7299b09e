//! Type inference and cleaning for loaded tables.
//!
//! This crate turns raw text tables into normalized ones:
//!
//! - **names**: header canonicalization and per-table name mappings
//! - **inference**: Numeric / Date / Categorical classification
//! - **normalization**: numeric coercion, imputation, clipping, dates
//! - **pipeline**: per-table orchestration with cleaning-log entries
//! - **consolidate**: union-of-columns merge of many tables

pub mod consolidate;
pub mod inference;
pub mod names;
pub mod normalization;
pub mod options;
pub mod pipeline;

// Re-export common functions for external use
pub use consolidate::consolidate;
pub use inference::{classify_column, classify_table_column, classify_values};
pub use names::{ColumnNameMapping, standardize_column_name};
pub use normalization::{ClipReport, DateReport, clip_outliers, normalize_date, parse_day_first};
pub use options::{NormalizeOptions, UNKNOWN_CATEGORY};
pub use pipeline::{normalize_column, normalize_table};
