//! Tunable thresholds for the normalization engine.

/// Placeholder written into absent categorical cells.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Thresholds used by classification and cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// Number of leading non-absent values sampled for dates.
    pub date_sample_size: usize,
    /// A column is a date column when the parsed share of the sample exceeds this.
    pub date_ratio_threshold: f64,
    /// Quantile used as the lower clipping bound.
    pub lower_quantile: f64,
    /// Quantile used as the upper clipping bound.
    pub upper_quantile: f64,
    /// Value written into absent categorical cells.
    pub categorical_fill: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            date_sample_size: 100,
            date_ratio_threshold: 0.5,
            lower_quantile: 0.01,
            upper_quantile: 0.99,
            categorical_fill: UNKNOWN_CATEGORY.to_string(),
        }
    }
}
