//! Numeric parsing, formatting, and order statistics.

use tidy_model::{Cell, Column};

/// Returns true if `value` is a base-10 numeric literal.
///
/// Accepts an optional sign, digits with an optional decimal point (at least
/// one digit overall), and an optional exponent. Words such as `inf` or `nan`
/// are rejected even though `f64::from_str` would take them.
pub fn is_numeric_literal(value: &str) -> bool {
    let bytes = value.trim().as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let mut mantissa_digits = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
        mantissa_digits += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exponent_start {
            return false;
        }
    }
    pos == bytes.len()
}

/// Parses a string as f64, returning None for anything but a numeric literal.
pub fn parse_f64(value: &str) -> Option<f64> {
    if !is_numeric_literal(value) {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a floating-point number without a trailing fractional zero.
///
/// `3.0` renders as `3`, `10.5` as `10.5`.
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    format!("{v}")
}

/// Converts every text cell of `column` to [`Cell::Numeric`].
///
/// Cells that do not parse become [`Cell::Absent`]. Returns how many were
/// downgraded that way.
pub fn coerce_numeric(column: &mut Column) -> usize {
    let mut failed = 0;
    for cell in &mut column.cells {
        if let Cell::Text(raw) = cell {
            *cell = match parse_f64(raw) {
                Some(value) => Cell::Numeric(value),
                None => {
                    failed += 1;
                    Cell::Absent
                }
            };
        }
    }
    failed
}

/// Numeric values of a column in row order.
pub fn numeric_values(column: &Column) -> Vec<f64> {
    column.cells.iter().filter_map(Cell::as_f64).collect()
}

/// Median of `values`; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Quantile `q` in `[0, 1]` with linear interpolation between order statistics.
///
/// For `n` sorted values the position is `h = (n - 1) * q`, and the result is
/// `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = h.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = h - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}
