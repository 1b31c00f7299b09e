//! CLI library components for csv-tidy.

pub mod logging;
pub mod operations;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod types;
