use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, TableError>;
