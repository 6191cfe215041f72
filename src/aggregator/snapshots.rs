//! Per-run snapshot property series on the aligned time axis.

use super::align::{compute_offsets, to_aligned};
use crate::model::{FuzzerRun, SnapshotProperty};
use crate::utils::error::GraphError;
use log::debug;

/// (aligned milliseconds, property value)
pub type MetricPoint = (i64, f64);

/// One run's series, named after the run
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub points: Vec<MetricPoint>,
}

/// Map every run's snapshots to aligned points of one property
///
/// **Public** - main entry point for snapshot series
///
/// # Arguments
/// * `runs` - Fuzzer runs ordered by start time
/// * `property` - Snapshot property to plot
///
/// # Returns
/// One series per run, in run order, with one point per snapshot in
/// snapshot order
///
/// # Errors
/// * `GraphError::EmptyInput` - no runs to align
pub fn map_snapshot_series(
    runs: &[FuzzerRun],
    property: SnapshotProperty,
) -> Result<Vec<NamedSeries>, GraphError> {
    let offsets = compute_offsets(runs)?;

    let series: Vec<NamedSeries> = runs
        .iter()
        .zip(offsets)
        .map(|(run, offset)| NamedSeries {
            name: run.name.clone(),
            points: run
                .snapshots
                .iter()
                .map(|s| (to_aligned(s.unix_time, offset), property.value_of(s)))
                .collect(),
        })
        .collect();

    debug!(
        "Mapped {} snapshots of {} across {} runs",
        series.iter().map(|s| s.points.len()).sum::<usize>(),
        property,
        series.len()
    );

    Ok(series)
}

/// Same as [`map_snapshot_series`], validating the property name first
///
/// # Errors
/// * `GraphError::UnknownProperty` - snapshots have no such property
pub fn map_snapshot_series_by_name(
    runs: &[FuzzerRun],
    property_name: &str,
) -> Result<Vec<NamedSeries>, GraphError> {
    let property: SnapshotProperty = property_name.parse()?;
    map_snapshot_series(runs, property)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Snapshot;

    fn snapshot(unix_time: i64, paths_total: u64) -> Snapshot {
        Snapshot {
            unix_time,
            paths_total,
            ..Default::default()
        }
    }

    fn run(id: u64, start: i64, last: i64, snapshots: Vec<Snapshot>) -> FuzzerRun {
        FuzzerRun {
            id,
            campaign_id: 1,
            name: format!("fuzzer-{}", id),
            started: true,
            start_time: start,
            last_update: last,
            snapshots,
        }
    }

    #[test]
    fn test_series_per_run() {
        let runs = vec![
            run(1, 0, 100, vec![snapshot(0, 1), snapshot(60, 5), snapshot(100, 9)]),
            run(2, 150, 300, vec![snapshot(160, 2), snapshot(300, 4)]),
        ];

        let series = map_snapshot_series(&runs, SnapshotProperty::PathsTotal).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "fuzzer-1");
        assert_eq!(
            series[0].points,
            vec![(0, 1.0), (60_000, 5.0), (100_000, 9.0)]
        );
        // 50s gap absorbed
        assert_eq!(series[1].points, vec![(110_000, 2.0), (250_000, 4.0)]);
    }

    #[test]
    fn test_run_without_snapshots() {
        let runs = vec![run(1, 0, 100, vec![snapshot(10, 3)]), run(2, 50, 80, vec![])];

        let series = map_snapshot_series(&runs, SnapshotProperty::PathsTotal).unwrap();

        assert_eq!(series[0].points.len(), 1);
        assert!(series[1].points.is_empty());
    }

    #[test]
    fn test_empty_runs() {
        assert_eq!(
            map_snapshot_series(&[], SnapshotProperty::CyclesDone),
            Err(GraphError::EmptyInput)
        );
    }

    #[test]
    fn test_unknown_property_name() {
        let runs = vec![run(1, 0, 100, vec![snapshot(10, 3)])];
        assert_eq!(
            map_snapshot_series_by_name(&runs, "bogus"),
            Err(GraphError::UnknownProperty("bogus".to_string()))
        );
    }
}
