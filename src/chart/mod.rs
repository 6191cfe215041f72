//! Chart documents for the dashboard frontend.
//!
//! This module handles:
//! - Wrapping point series into a chart specification (title, series, axes)
//! - Writing chart documents as JSON (pretty and compact)

pub mod envelope;
pub mod json;

// Re-export main types and functions
pub use envelope::{build_chart, Axis, ChartOptions, ChartSeries, ChartSpec, SeriesInput, Title};
pub use json::{chart_to_string, read_chart, validate_path, write_chart};
