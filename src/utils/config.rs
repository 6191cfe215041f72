//! Configuration and constants for the CLI.

/// Campaign dump schema version understood by the store
pub const DUMP_SCHEMA_VERSION: &str = "1.0.0";

/// Environment variable holding the default dump path
pub const DATA_ENV_VAR: &str = "CAMPAIGN_GRAPHS_DATA";

// Aligned time is reported in milliseconds, timestamps arrive in epoch seconds
pub const MS_PER_SECOND: i64 = 1000;

// Width of the vertical step drawn for a new distinct crash
pub const STEP_WIDTH_MS: i64 = 1;

/// Chart type used when a series does not override it
pub const DEFAULT_CHART_TYPE: &str = "line";

/// Axis type understood by the charting frontend for millisecond durations
pub const DURATION_AXIS_TYPE: &str = "datetime";
pub const DURATION_AXIS_TITLE: &str = "Duration";

pub const DISTINCT_ADDRESSES_TITLE: &str = "Distinct Addresses";
pub const DISTINCT_BACKTRACES_TITLE: &str = "Distinct Backtraces";
