//! JSON chart output writer.
//!
//! Writes chart documents to files or strings. A graph with no data yet is
//! written as an empty object (`{}`), which the frontend renders as
//! "no data".

use super::envelope::ChartSpec;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a chart (or its absence) to a JSON value
fn chart_value(chart: Option<&ChartSpec>) -> Result<serde_json::Value, OutputError> {
    match chart {
        Some(chart) => Ok(serde_json::to_value(chart)?),
        None => Ok(serde_json::Value::Object(serde_json::Map::new())),
    }
}

/// Write a chart to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `chart` - Chart to write, `None` for a graph without data
/// * `output_path` - Path to output JSON file
/// * `compact` - Skip pretty printing
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_chart(
    chart: Option<&ChartSpec>,
    output_path: impl AsRef<Path>,
    compact: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let value = chart_value(chart)?;
    let mut writer = BufWriter::new(File::create(output_path)?);

    if compact {
        serde_json::to_writer(&mut writer, &value)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, &value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Chart written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Render a chart to a JSON string
///
/// **Public** - used for stdout output and tests
pub fn chart_to_string(chart: Option<&ChartSpec>, compact: bool) -> Result<String, OutputError> {
    let value = chart_value(chart)?;
    let rendered = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(rendered)
}

/// Validate that output path is writable
///
/// **Public** - shared with the CLI before any work is done
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a chart back from a JSON file
///
/// Returns `None` for an empty-object document.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_chart(input_path: impl AsRef<Path>) -> Result<Option<ChartSpec>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading chart from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value: serde_json::Value = serde_json::from_reader(file)?;

    if value.as_object().is_some_and(|o| o.is_empty()) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_value(value)?))
}
