//! Append-only audit trail of cleaning operations.
//!
//! The log serializes to the document shape consumed by external tooling:
//!
//! ```json
//! {
//!   "timestamp": "2024-01-15T10:30:45.123456",
//!   "operations": [
//!     {"operation": "load_file", "details": {...}, "timestamp": "..."}
//!   ]
//! }
//! ```

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag identifying a cleaning operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LoadFile,
    StandardizeColumns,
    FillMissingNumeric,
    FillMissingCategorical,
    OutlierTruncate,
    FormatDates,
    Consolidate,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadFile => "load_file",
            Self::StandardizeColumns => "standardize_columns",
            Self::FillMissingNumeric => "fill_missing_numeric",
            Self::FillMissingCategorical => "fill_missing_categorical",
            Self::OutlierTruncate => "outlier_truncate",
            Self::FormatDates => "format_dates",
            Self::Consolidate => "consolidate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningLogEntry {
    operation: Operation,
    details: Map<String, Value>,
    #[serde(with = "iso_timestamp")]
    timestamp: NaiveDateTime,
}

impl CleaningLogEntry {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Looks up a single detail value by key.
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Ordered record of every operation performed during one run.
///
/// Entries can only be added through [`CleaningLog::record`]; nothing removes
/// or rewrites an entry once it is in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningLog {
    #[serde(with = "iso_timestamp")]
    timestamp: NaiveDateTime,
    operations: Vec<CleaningLogEntry>,
}

impl Default for CleaningLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningLog {
    /// Starts a log stamped with the current local time.
    pub fn new() -> Self {
        Self::with_timestamp(now())
    }

    pub fn with_timestamp(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            operations: Vec::new(),
        }
    }

    /// Appends an entry. Non-object `details` are stored under a `value` key.
    pub fn record(&mut self, operation: Operation, details: Value) -> &CleaningLogEntry {
        let details = match details {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self.operations.push(CleaningLogEntry {
            operation,
            details,
            timestamp: now(),
        });
        &self.operations[self.operations.len() - 1]
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn entries(&self) -> &[CleaningLogEntry] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Entries with the given operation tag, in emission order.
    pub fn entries_for(&self, operation: Operation) -> impl Iterator<Item = &CleaningLogEntry> {
        self.operations
            .iter()
            .filter(move |entry| entry.operation == operation)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

mod iso_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT).map_err(D::Error::custom)
    }
}
