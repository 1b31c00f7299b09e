//! Type-specific cleaning steps.
//!
//! - **numeric**: literal parsing, formatting, median and quantiles
//! - **missing**: median / placeholder imputation
//! - **outlier**: percentile clipping
//! - **datetime**: day-first date parsing and ISO 8601 formatting

pub mod datetime;
pub mod missing;
pub mod numeric;
pub mod outlier;

// Re-export commonly used items
pub use datetime::{
    DateReport, ISO_DATE_FORMAT, ISO_DATE_LABEL, normalize_date, normalize_date_column,
    parse_day_first,
};
pub use missing::{fill_missing_categorical, fill_missing_numeric};
pub use numeric::{
    coerce_numeric, format_numeric, is_numeric_literal, median, numeric_values, parse_f64,
    quantile,
};
pub use outlier::{ClipReport, clip_outliers};
