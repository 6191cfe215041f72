//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the time alignment and series computations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("No fuzzer runs to align")]
    EmptyInput,

    #[error("Crash aggregation requested for a campaign without runs")]
    NoRuns,

    #[error("Snapshot does not have property \"{0}\"")]
    UnknownProperty(String),

    #[error("Unknown crash dedup key \"{0}\" (expected address or backtrace)")]
    UnknownDedupKey(String),

    #[error("Crash {crash} belongs to run {run}, which has no time offset")]
    MissingOffset { crash: u64, run: u64 },
}

/// Errors that can occur while loading or querying campaign data
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read campaign data: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported dump version: {0}")]
    UnsupportedVersion(String),

    #[error("Campaign not found: {0}")]
    UnknownCampaign(u64),
}

/// Errors surfaced by the dashboard series functions
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to encode series: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
