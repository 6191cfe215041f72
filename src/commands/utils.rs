use crate::model::{Dataset, SnapshotProperty};
use crate::store::load_dataset;
use crate::utils::config::DUMP_SCHEMA_VERSION;
use anyhow::Result;
use chrono::DateTime;
use std::path::PathBuf;

/// Render epoch seconds as RFC 3339, falling back to the raw number
pub fn format_epoch(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| seconds.to_string())
}

/// Per-campaign summary lines of a dump
pub fn summarize_dataset(dataset: &Dataset) -> Vec<String> {
    let mut lines = Vec::new();

    for campaign in &dataset.campaigns {
        let runs: Vec<_> = dataset
            .fuzzers
            .iter()
            .filter(|f| f.campaign_id == campaign.id)
            .collect();
        let crashes = dataset
            .crashes
            .iter()
            .filter(|c| c.campaign_id == campaign.id)
            .count();

        lines.push(format!(
            "Campaign {} \"{}\" ({}): {} runs, {} crashes",
            campaign.id,
            campaign.name,
            if campaign.started { "started" } else { "not started" },
            runs.len(),
            crashes
        ));

        for run in runs {
            lines.push(format!(
                "  {} [{}]: {} .. {} ({} snapshots)",
                run.name,
                run.id,
                format_epoch(run.start_time),
                format_epoch(run.last_activity()),
                run.snapshots.len()
            ));
        }
    }

    lines
}

/// Validate a campaign dump file
pub fn validate_dataset_file(file_path: PathBuf) -> Result<()> {
    println!("Validating campaign dump: {}", file_path.display());

    let dataset = load_dataset(&file_path)?;

    println!("✓ Valid campaign dump");
    println!("  Version: {}", dataset.version);
    println!("  Campaigns: {}", dataset.campaigns.len());
    println!("  Fuzzers: {}", dataset.fuzzers.len());
    println!("  Crashes: {}", dataset.crashes.len());
    for line in summarize_dataset(&dataset) {
        println!("  {}", line);
    }

    Ok(())
}

/// List the snapshot properties that can be graphed
pub fn display_properties() {
    println!("Graphable snapshot properties:");
    for property in SnapshotProperty::ALL {
        println!("  {:<16} {}", property.name(), property.title());
    }
}

/// Display version information
pub fn display_version() {
    println!("Campaign Graphs v{}", env!("CARGO_PKG_VERSION"));
    println!("Dump Schema: v{}", DUMP_SCHEMA_VERSION);
    println!();
    println!("Time-aligned fuzzing campaign graphs.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Campaign, FuzzerRun};

    #[test]
    fn test_format_epoch() {
        assert_eq!(format_epoch(0), "1970-01-01T00:00:00+00:00");
        assert_eq!(format_epoch(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_summarize_dataset() {
        let dataset = Dataset {
            version: DUMP_SCHEMA_VERSION.to_string(),
            campaigns: vec![Campaign { id: 1, name: "libpng".to_string(), started: true }],
            fuzzers: vec![FuzzerRun {
                id: 2,
                campaign_id: 1,
                name: "master".to_string(),
                started: true,
                start_time: 0,
                last_update: 60,
                snapshots: Vec::new(),
            }],
            crashes: Vec::new(),
        };

        let lines = summarize_dataset(&dataset);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Campaign 1 \"libpng\" (started): 1 runs, 0 crashes");
        assert!(lines[1].contains("1970-01-01T00:01:00+00:00"));
    }
}
