//! Graph command implementation.
//!
//! The graph command:
//! 1. Loads the campaign dump
//! 2. Computes the requested series
//! 3. Wraps them into a chart document
//! 4. Writes the chart to a file or stdout

use crate::chart::{chart_to_string, validate_path, write_chart};
use crate::graphs::{aggregated_chart, distinct_chart, property_chart};
use crate::model::{CampaignId, CrashFilter, DedupKey};
use crate::store::MemoryStore;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Which dashboard graph to produce
#[derive(Debug, Clone, PartialEq)]
pub enum GraphKind {
    /// Distinct addresses and backtraces
    Aggregated,

    /// One snapshot property per run
    Property(String),

    /// One distinct-crash series
    Distinct { key: DedupKey, filter: CrashFilter },
}

/// Arguments for the graph commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Campaign dump file
    pub data: PathBuf,

    pub campaign_id: CampaignId,

    pub kind: GraphKind,

    /// Output path for the chart JSON (stdout if None)
    pub output: Option<PathBuf>,

    /// Skip pretty printing
    pub compact: bool,
}

/// Validate graph arguments before loading anything
pub fn validate_args(args: &GraphArgs) -> Result<()> {
    if !args.data.exists() {
        anyhow::bail!("Campaign dump not found: {}", args.data.display());
    }

    if let Some(output) = &args.output {
        validate_path(output).context("Invalid output path")?;
    }

    if let GraphKind::Property(name) = &args.kind {
        name.parse::<crate::model::SnapshotProperty>()?;
    }

    Ok(())
}

/// Execute a graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dump read or version errors
/// * Unknown campaign or property
/// * Alignment failures (no runs) and file write errors
pub fn execute_graph(args: GraphArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Loading campaign dump: {}", args.data.display());
    let store = MemoryStore::open(&args.data)
        .with_context(|| format!("Failed to load campaign dump {}", args.data.display()))?;

    info!("Computing {:?} graph for campaign {}", args.kind, args.campaign_id);
    let chart = match &args.kind {
        GraphKind::Aggregated => aggregated_chart(&store, args.campaign_id),
        GraphKind::Property(name) => property_chart(&store, args.campaign_id, name),
        GraphKind::Distinct { key, filter } => {
            distinct_chart(&store, args.campaign_id, *key, filter)
        }
    }
    .context("Failed to compute graph")?;

    if chart.is_none() {
        info!("Campaign {} has no graph data yet", args.campaign_id);
    }

    match &args.output {
        Some(path) => {
            write_chart(chart.as_ref(), path, args.compact).context("Failed to write chart")?;
        }
        None => {
            println!("{}", chart_to_string(chart.as_ref(), args.compact)?);
        }
    }

    debug!("Graph computed in {:.2?}", start_time.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: GraphKind) -> GraphArgs {
        GraphArgs {
            data: PathBuf::from("/nonexistent/dump.json"),
            campaign_id: 1,
            kind,
            output: None,
            compact: false,
        }
    }

    #[test]
    fn test_validate_missing_dump() {
        assert!(validate_args(&args(GraphKind::Aggregated)).is_err());
    }

    #[test]
    fn test_validate_unknown_property() {
        let dump = tempfile::NamedTempFile::new().unwrap();
        let mut a = args(GraphKind::Property("bogus".to_string()));
        a.data = dump.path().to_path_buf();

        assert!(validate_args(&a).is_err());

        a.kind = GraphKind::Property("map_size".to_string());
        assert!(validate_args(&a).is_ok());
    }
}
