use campaign_graphs::chart::{read_chart, write_chart};
use campaign_graphs::graphs::{
    aggregated_chart, aligned_series_for, distinct_chart, distinct_crash_series_for, property_chart,
};
use campaign_graphs::model::{CrashFilter, DedupKey};
use campaign_graphs::store::{CampaignStore, MemoryStore};
use campaign_graphs::utils::{GraphError, SeriesError};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

/// Two runs with a 100s idle gap, three crashes, two sharing an address
fn write_dump() -> NamedTempFile {
    let dump = json!({
        "version": "1.0.0",
        "campaigns": [
            {"id": 1, "name": "libxml2", "started": true},
            {"id": 2, "name": "sqlite", "started": false}
        ],
        "fuzzers": [
            {
                "id": 11, "campaign_id": 1, "name": "slave-1", "started": true,
                "start_time": 1000, "last_update": 1100,
                "snapshots": [
                    {"unix_time": 1000, "paths_total": 10, "execs_per_sec": 900.5},
                    {"unix_time": 1100, "paths_total": 25, "execs_per_sec": 1010.0}
                ]
            },
            {
                "id": 10, "campaign_id": 1, "name": "master", "started": true,
                "start_time": 1200, "last_update": 1400,
                "snapshots": [
                    {"unix_time": 1300, "paths_total": 30}
                ]
            },
            {
                "id": 12, "campaign_id": 1, "name": "pending", "started": false,
                "start_time": 5000, "last_update": 5000
            }
        ],
        "crashes": [
            {"id": 1, "campaign_id": 1, "instance_id": 11, "created": 1050,
             "address": "0x4141", "backtrace": "png_read;inflate", "crash_in_debugger": true},
            {"id": 2, "campaign_id": 1, "instance_id": 10, "created": 1250,
             "address": "0x4141", "backtrace": "png_write", "crash_in_debugger": true},
            {"id": 3, "campaign_id": 1, "instance_id": 10, "created": 1300,
             "address": "0x4242", "backtrace": "png_write", "crash_in_debugger": false}
        ]
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", dump).unwrap();
    file
}

#[test]
fn test_aligned_series_for_property() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    let series = aligned_series_for(&store, 1, "paths_total").unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "slave-1");
    assert_eq!(series[0].points, vec![(0, 10.0), (100_000, 25.0)]);
    // master starts after 100s of idle time, offset 1100
    assert_eq!(series[1].name, "master");
    assert_eq!(series[1].points, vec![(200_000, 30.0)]);
}

#[test]
fn test_unknown_property_rejected() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    let err = aligned_series_for(&store, 1, "campaign_id").unwrap_err();
    assert!(matches!(err, SeriesError::Graph(GraphError::UnknownProperty(name)) if name == "campaign_id"));
}

#[test]
fn test_distinct_series_by_key() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    let addresses =
        distinct_crash_series_for(&store, 1, DedupKey::Address, &CrashFilter::default()).unwrap();
    // crash 3 was never reproduced in the debugger, crash 2 repeats an address
    assert_eq!(addresses, vec![(0, 0), (1, 1), (300_000, 1)]);

    let backtraces =
        distinct_crash_series_for(&store, 1, DedupKey::Backtrace, &CrashFilter::default()).unwrap();
    assert_eq!(backtraces, vec![(0, 0), (1, 1), (50_000, 1), (50_001, 2), (300_000, 2)]);

    let all_addresses =
        distinct_crash_series_for(&store, 1, DedupKey::Address, &CrashFilter::new().all_crashes())
            .unwrap();
    assert_eq!(all_addresses.last(), Some(&(300_000, 2)));
}

#[test]
fn test_aggregated_chart_round_trip() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    let chart = aggregated_chart(&store, 1).unwrap().unwrap();
    assert_eq!(chart.series[0].name, "Distinct Addresses");
    assert_eq!(chart.series[1].name, "Distinct Backtraces");

    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("charts/aggregated.json");
    write_chart(Some(&chart), &out, true).unwrap();

    assert_eq!(read_chart(&out).unwrap(), Some(chart));
}

#[test]
fn test_unstarted_campaign_has_no_graphs() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    assert!(store.list_runs(2).unwrap().is_empty());
    assert_eq!(aggregated_chart(&store, 2).unwrap(), None);
    assert_eq!(property_chart(&store, 2, "paths_total").unwrap(), None);
    assert_eq!(
        distinct_chart(&store, 2, DedupKey::Address, &CrashFilter::default()).unwrap(),
        None
    );
}

#[test]
fn test_property_chart_titles() {
    let dump = write_dump();
    let store = MemoryStore::open(dump.path()).unwrap();

    let chart = property_chart(&store, 1, "execs_per_sec").unwrap().unwrap();

    assert_eq!(chart.title.text, "Execs Per Sec");
    assert_eq!(chart.y_axis.title.text, "Execs Per Sec");
    assert_eq!(chart.x_axis.title.text, "Duration");
    assert_eq!(chart.series[0].data, json!([[0, 900.5], [100000, 1010.0]]));
    assert_eq!(chart.series[1].data, json!([[200000, 0.0]]));
}
