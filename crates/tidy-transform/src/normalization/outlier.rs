//! Percentile clipping of numeric columns.

use serde::Serialize;
use serde_json::json;

use tidy_model::{Cell, CleaningLog, Column, Operation};

use super::numeric::{numeric_values, quantile};

/// Bounds and extremes observed while clipping one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipReport {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub original_min: f64,
    pub original_max: f64,
    pub clipped_min: f64,
    pub clipped_max: f64,
    pub values_clipped: usize,
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Clamps the numeric cells of `column` to `[q(lower), q(upper)]`.
///
/// Bounds come from [`quantile`] over the present values. Values outside the
/// bounds are counted before clipping; an `outlier_truncate` entry is logged
/// only when that count is non-zero. Absent cells are left untouched.
///
/// Returns `None` for a column without numeric values.
pub fn clip_outliers(
    column: &mut Column,
    lower_quantile: f64,
    upper_quantile: f64,
    log: &mut CleaningLog,
) -> Option<ClipReport> {
    let values = numeric_values(column);
    let lower = quantile(&values, lower_quantile)?;
    let upper = quantile(&values, upper_quantile)?;
    let (original_min, original_max) = min_max(&values);

    let mut values_clipped = 0usize;
    for cell in &mut column.cells {
        if let Cell::Numeric(value) = cell
            && (*value < lower || *value > upper)
        {
            values_clipped += 1;
            *value = if *value < lower { lower } else { upper };
        }
    }

    let (clipped_min, clipped_max) = min_max(&numeric_values(column));
    if values_clipped > 0 {
        log.record(
            Operation::OutlierTruncate,
            json!({
                "column": column.name,
                "lower_bound": lower,
                "upper_bound": upper,
                "values_clipped": values_clipped,
            }),
        );
        tracing::debug!(column = %column.name, lower, upper, values_clipped, "clipped outliers");
    }

    Some(ClipReport {
        lower_bound: lower,
        upper_bound: upper,
        original_min,
        original_max,
        clipped_min,
        clipped_max,
        values_clipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_column(values: &[f64]) -> Column {
        Column::new("amount", values.iter().map(|v| Cell::Numeric(*v)).collect())
    }

    #[test]
    fn test_clips_extremes() {
        let mut values: Vec<f64> = (1..=99).map(f64::from).collect();
        values.push(10_000.0);
        let mut column = numeric_column(&values);
        let mut log = CleaningLog::new();
        let report = clip_outliers(&mut column, 0.01, 0.99, &mut log).unwrap();

        assert_eq!(report.original_max, 10_000.0);
        assert!(report.clipped_max <= report.original_max);
        assert!(report.clipped_min >= report.original_min);
        assert_eq!(report.clipped_max, report.upper_bound);
        assert_eq!(report.values_clipped, 2);
        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.operation(), Operation::OutlierTruncate);
        assert_eq!(entry.detail("values_clipped"), Some(&json!(2)));
    }

    #[test]
    fn test_constant_column_is_noop() {
        let mut column = numeric_column(&[5.0, 5.0, 5.0]);
        let before = column.clone();
        let mut log = CleaningLog::new();
        let report = clip_outliers(&mut column, 0.01, 0.99, &mut log).unwrap();
        assert_eq!(report.values_clipped, 0);
        assert_eq!(column, before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_absent_cells_untouched() {
        let mut column = Column::new("x", vec![Cell::Numeric(1.0), Cell::Absent]);
        let mut log = CleaningLog::new();
        clip_outliers(&mut column, 0.01, 0.99, &mut log).unwrap();
        assert_eq!(column.cells[1], Cell::Absent);
    }

    #[test]
    fn test_empty_column_has_no_report() {
        let mut column = Column::absent("x", 3);
        let mut log = CleaningLog::new();
        assert!(clip_outliers(&mut column, 0.01, 0.99, &mut log).is_none());
        assert!(log.is_empty());
    }
}
