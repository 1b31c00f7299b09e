//! Column type classification.
//!
//! A column is classified exactly once, from its non-absent values:
//!
//! 1. **Numeric** when every value is a numeric literal with a finite value
//!    (`1e400` overflows and does not count). This check is
//!    authoritative and runs first.
//! 2. **Date** when more than `date_ratio_threshold` of the first
//!    `date_sample_size` values parse as calendar dates.
//! 3. **Categorical** otherwise, including columns with no values at all.

use tidy_model::{Cell, Column, ColumnType, Table, TableError};

use crate::normalization::datetime::parse_day_first;
use crate::normalization::numeric::{format_numeric, parse_f64};
use crate::options::NormalizeOptions;

/// Classifies a sequence of present values.
pub fn classify_values<'a, I>(values: I, options: &NormalizeOptions) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    let mut count = 0usize;
    let mut all_numeric = true;
    for value in values.clone() {
        count += 1;
        if parse_f64(value).is_none() {
            all_numeric = false;
            break;
        }
    }
    if count == 0 {
        return ColumnType::Categorical;
    }
    if all_numeric {
        return ColumnType::Numeric;
    }

    let mut sampled = 0usize;
    let mut parsed = 0usize;
    for value in values.take(options.date_sample_size) {
        sampled += 1;
        if parse_day_first(value).is_some() {
            parsed += 1;
        }
    }
    if sampled > 0 && parsed as f64 / sampled as f64 > options.date_ratio_threshold {
        ColumnType::Date
    } else {
        ColumnType::Categorical
    }
}

/// Classifies a column from its non-absent cells.
///
/// Cells already converted to [`Cell::Numeric`] count as numeric literals.
pub fn classify_column(column: &Column, options: &NormalizeOptions) -> ColumnType {
    let texts: Vec<String> = column
        .present()
        .filter_map(|cell| match cell {
            Cell::Text(value) => Some(value.clone()),
            Cell::Numeric(value) => Some(format_numeric(*value)),
            Cell::Absent => None,
        })
        .collect();
    classify_values(texts.iter().map(String::as_str), options)
}

/// Classifies the column `name` of `table`.
///
/// A name that does not exist is a [`TableError::ColumnNotFound`], never a
/// classification.
pub fn classify_table_column(
    table: &Table,
    name: &str,
    options: &NormalizeOptions,
) -> Result<ColumnType, TableError> {
    let column = table.column(name)?;
    Ok(classify_column(column, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(values: &[&str]) -> ColumnType {
        classify_values(values.iter().copied(), &NormalizeOptions::default())
    }

    #[test]
    fn test_numeric() {
        assert_eq!(classify(&["1", "2.5", "-3"]), ColumnType::Numeric);
    }

    #[test]
    fn test_numeric_wins_over_compact_dates() {
        assert_eq!(classify(&["20240115", "20240116"]), ColumnType::Numeric);
    }

    #[test]
    fn test_dates_majority() {
        assert_eq!(
            classify(&["2023-01-05", "05/12/2023", "n/a date", "15.03.2023"]),
            ColumnType::Date
        );
    }

    #[test]
    fn test_exactly_half_is_not_date() {
        assert_eq!(classify(&["2023-01-05", "Shipped"]), ColumnType::Categorical);
    }

    #[test]
    fn test_overflowing_literals_are_not_numeric() {
        assert_eq!(classify(&["1e400", "2e400"]), ColumnType::Categorical);
        assert_eq!(classify(&["1", "-1e400"]), ColumnType::Categorical);
    }

    #[test]
    fn test_empty_is_categorical() {
        assert_eq!(classify(&[]), ColumnType::Categorical);
    }

    #[test]
    fn test_sample_limited_to_first_values() {
        let options = NormalizeOptions {
            date_sample_size: 2,
            ..NormalizeOptions::default()
        };
        let values = ["2023-01-01", "2023-01-02", "x", "y", "z"];
        assert_eq!(
            classify_values(values.iter().copied(), &options),
            ColumnType::Date
        );
    }
}
