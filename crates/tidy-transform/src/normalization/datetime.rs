//! Calendar date parsing and ISO 8601 formatting.
//!
//! Inputs come from spreadsheets and exports with no agreed convention, so the
//! parser accepts an explicit, ordered set of shapes rather than "anything":
//!
//! - numeric triples separated by `-`, `/` or `.`:
//!   - `YYYY-MM-DD` when the first field has four digits (or exceeds 31)
//!   - `DD/MM/YYYY` otherwise, falling back to `MM/DD/YYYY` only when the
//!     day-first reading is not a valid date
//! - compact `YYYYMMDD`
//! - English month names, full or abbreviated: `15 Jan 2024`, `15-Jan-2024`,
//!   `Jan 15, 2024`, `2024-Jan-15`
//!
//! Two-digit years pivot at 69 (`68` is 2068, `69` is 1969). A trailing time
//! of day (`10:30`, `10:30:45`, `10:30:45.123`) after a space or `T` is ignored.

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use tidy_model::{Cell, CleaningLog, Column, Operation};

use super::numeric::format_numeric;

/// `strftime` pattern of normalized dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format label recorded in the cleaning log.
pub const ISO_DATE_LABEL: &str = "ISO-8601 (YYYY-MM-DD)";

const DATE_SEPARATORS: [char; 3] = ['-', '/', '.'];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parses a date-like string, preferring day-first order when ambiguous.
///
/// `05/12/2023` is 5 December 2023; `12/25/2023` has no valid day-first
/// reading and is 25 December 2023.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_date_part(trimmed).or_else(|| {
        let idx = trimmed.rfind([' ', 'T'])?;
        let (date, time) = (trimmed[..idx].trim_end(), &trimmed[idx + 1..]);
        if is_time_of_day(time) {
            parse_date_part(date)
        } else {
            None
        }
    })
}

/// Parses and formats as `YYYY-MM-DD`, or `None` when the value is not a date.
pub fn normalize_date(value: &str) -> Option<String> {
    parse_day_first(value).map(|date| date.format(ISO_DATE_FORMAT).to_string())
}

fn is_time_of_day(value: &str) -> bool {
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}

fn parse_date_part(value: &str) -> Option<NaiveDate> {
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(value, "%Y%m%d").ok();
    }
    parse_numeric_triple(value).or_else(|| parse_month_name(value))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn expand_year(digits: &str) -> Option<i32> {
    let value: i32 = digits.parse().ok()?;
    match digits.len() {
        4 => Some(value),
        1 | 2 if value < 69 => Some(2000 + value),
        1 | 2 => Some(1900 + value),
        _ => None,
    }
}

fn parse_numeric_triple(value: &str) -> Option<NaiveDate> {
    let sep = value.chars().find(|c| !c.is_ascii_digit())?;
    if !DATE_SEPARATORS.contains(&sep) {
        return None;
    }
    let parts: Vec<&str> = value.split(sep).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    if !(is_digits(first) && is_digits(second) && is_digits(third)) {
        return None;
    }
    if second.len() > 2 {
        return None;
    }
    let leading: u32 = first.parse().ok()?;
    let middle: u32 = second.parse().ok()?;

    if first.len() == 4 || (first.len() == 2 && leading > 31) {
        if third.len() > 2 {
            return None;
        }
        let year = expand_year(first)?;
        let day: u32 = third.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, middle, day);
    }

    if first.len() > 2 || !matches!(third.len(), 2 | 4) {
        return None;
    }
    let year = expand_year(third)?;
    NaiveDate::from_ymd_opt(year, middle, leading)
        .or_else(|| NaiveDate::from_ymd_opt(year, leading, middle))
}

fn month_from_name(token: &str) -> Option<u32> {
    if !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let lower = token.to_ascii_lowercase();
    let index = MONTH_NAMES.iter().position(|full| {
        *full == lower || (lower.len() == 3 && full.starts_with(&lower)) || (lower == "sept" && *full == "september")
    })?;
    u32::try_from(index + 1).ok()
}

fn parse_month_name(value: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '/' | '.' | ','))
        .filter(|token| !token.is_empty())
        .collect();
    let [a, b, c] = tokens.as_slice() else {
        return None;
    };
    let (year, month, day) = if let Some(month) = month_from_name(b) {
        if a.len() == 4 {
            (*a, month, *c)
        } else {
            (*c, month, *a)
        }
    } else if let Some(month) = month_from_name(a) {
        (*c, month, *b)
    } else {
        return None;
    };
    if !is_digits(year) || !is_digits(day) || day.len() > 2 || !matches!(year.len(), 2 | 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_year(year)?, month, day.parse().ok()?)
}

/// Outcome of normalizing one date column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateReport {
    pub parsed: usize,
    pub failed: usize,
}

/// Rewrites every present cell of `column` as `YYYY-MM-DD`.
///
/// Values that do not parse become [`Cell::Absent`]; absent cells stay absent.
/// One `format_dates` entry is logged for the column regardless of failures.
pub fn normalize_date_column(column: &mut Column, log: &mut CleaningLog) -> DateReport {
    let mut report = DateReport::default();
    for cell in &mut column.cells {
        let normalized = match cell {
            Cell::Text(raw) => normalize_date(raw),
            Cell::Numeric(value) => normalize_date(&format_numeric(*value)),
            Cell::Absent => continue,
        };
        *cell = match normalized {
            Some(iso) => {
                report.parsed += 1;
                Cell::Text(iso)
            }
            None => {
                report.failed += 1;
                Cell::Absent
            }
        };
    }
    log.record(
        Operation::FormatDates,
        json!({
            "column": column.name,
            "format": ISO_DATE_LABEL,
        }),
    );
    tracing::debug!(
        column = %column.name,
        parsed = report.parsed,
        failed = report.failed,
        "normalized dates"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_year_first() {
        assert_eq!(parse_day_first("2023-10-01"), ymd(2023, 10, 1));
        assert_eq!(parse_day_first("2023/10/01"), ymd(2023, 10, 1));
        assert_eq!(parse_day_first("2023.1.5"), ymd(2023, 1, 5));
    }

    #[test]
    fn test_day_first_precedence() {
        assert_eq!(parse_day_first("05/12/2023"), ymd(2023, 12, 5));
        assert_eq!(parse_day_first("05-12-2023"), ymd(2023, 12, 5));
        assert_eq!(parse_day_first("05.12.2023"), ymd(2023, 12, 5));
    }

    #[test]
    fn test_month_first_fallback() {
        assert_eq!(parse_day_first("12/25/2023"), ymd(2023, 12, 25));
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(parse_day_first("01/02/23"), ymd(2023, 2, 1));
        assert_eq!(parse_day_first("01/02/75"), ymd(1975, 2, 1));
        assert_eq!(parse_day_first("99-01-02"), ymd(1999, 1, 2));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_day_first("15 Jan 2024"), ymd(2024, 1, 15));
        assert_eq!(parse_day_first("15-Jan-2024"), ymd(2024, 1, 15));
        assert_eq!(parse_day_first("January 15, 2024"), ymd(2024, 1, 15));
        assert_eq!(parse_day_first("Sept 3 2024"), ymd(2024, 9, 3));
        assert_eq!(parse_day_first("2024-Mar-15"), ymd(2024, 3, 15));
    }

    #[test]
    fn test_time_suffix_ignored() {
        assert_eq!(parse_day_first("2023-10-01 10:30:00"), ymd(2023, 10, 1));
        assert_eq!(parse_day_first("2023-10-01T10:30"), ymd(2023, 10, 1));
        assert_eq!(parse_day_first("15/01/2024 08:15:30.5"), ymd(2024, 1, 15));
    }

    #[test]
    fn test_compact() {
        assert_eq!(parse_day_first("20240115"), ymd(2024, 1, 15));
    }

    #[test]
    fn test_rejects_non_dates() {
        for value in ["", "Shipped", "31/31/2023", "2023-13-01", "1.5", "12", "a/b/c", "2023-02-30"] {
            assert_eq!(parse_day_first(value), None, "{value}");
        }
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("23.09.2023").as_deref(), Some("2023-09-23"));
        assert_eq!(normalize_date("garbage"), None);
    }
}
