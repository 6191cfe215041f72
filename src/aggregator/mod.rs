//! Aggregation of campaign data into time-aligned series.
//!
//! This module transforms fuzzer runs and crash records into:
//! - Per-run time offsets that remove idle gaps between runs
//! - Cumulative distinct-crash step series
//! - Per-run snapshot property series

pub mod align;
pub mod distinct;
pub mod snapshots;

// Re-export main types and functions
pub use align::{compute_offsets, Timeline};
pub use distinct::{aggregate_distinct, step_points, step_series, CountPoint};
pub use snapshots::{map_snapshot_series, map_snapshot_series_by_name, MetricPoint, NamedSeries};
