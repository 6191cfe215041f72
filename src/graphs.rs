//! Dashboard graphs of a campaign.
//!
//! Glue between the [`CampaignStore`] and the series computations, plus the
//! gating rules deciding whether a graph has any data to show yet.

use crate::aggregator::{aggregate_distinct, map_snapshot_series, CountPoint, NamedSeries};
use crate::chart::{build_chart, ChartSpec, SeriesInput};
use crate::model::{CampaignId, CrashFilter, DedupKey, SnapshotProperty};
use crate::store::CampaignStore;
use crate::utils::config::{DISTINCT_ADDRESSES_TITLE, DISTINCT_BACKTRACES_TITLE};
use crate::utils::error::SeriesError;
use log::{debug, info};

/// Per-run aligned series of one snapshot property
///
/// # Errors
/// * `GraphError::UnknownProperty` - snapshots have no such property
/// * `GraphError::EmptyInput` - the campaign has no started runs
/// * `StoreError::UnknownCampaign`
pub fn aligned_series_for(
    store: &impl CampaignStore,
    campaign_id: CampaignId,
    property_name: &str,
) -> Result<Vec<NamedSeries>, SeriesError> {
    let property: SnapshotProperty = property_name.parse()?;
    let runs = store.list_runs(campaign_id)?;
    Ok(map_snapshot_series(&runs, property)?)
}

/// Cumulative distinct-crash series of a campaign
///
/// # Errors
/// * `GraphError::NoRuns` - the campaign has no started runs
/// * `GraphError::MissingOffset` - a crash belongs to a run that never started
/// * `StoreError::UnknownCampaign`
pub fn distinct_crash_series_for(
    store: &impl CampaignStore,
    campaign_id: CampaignId,
    key: DedupKey,
    filter: &CrashFilter,
) -> Result<Vec<CountPoint>, SeriesError> {
    let runs = store.list_runs(campaign_id)?;
    let crashes = store.list_distinct_crashes(campaign_id, key, filter)?;
    Ok(aggregate_distinct(&crashes, &runs)?)
}

/// Distinct addresses and backtraces over time
///
/// `None` while the campaign has not started or has no crash at all.
pub fn aggregated_chart(
    store: &impl CampaignStore,
    campaign_id: CampaignId,
) -> Result<Option<ChartSpec>, SeriesError> {
    let campaign = store.campaign(campaign_id)?;
    if !campaign.started || !store.has_crashes(campaign_id)? {
        debug!("Campaign {} has no crash data yet", campaign_id);
        return Ok(None);
    }

    let filter = CrashFilter::default();
    let addresses = distinct_crash_series_for(store, campaign_id, DedupKey::Address, &filter)?;
    let backtraces = distinct_crash_series_for(store, campaign_id, DedupKey::Backtrace, &filter)?;

    info!(
        "Campaign {}: {} address points, {} backtrace points",
        campaign.name,
        addresses.len(),
        backtraces.len()
    );

    Ok(Some(build_chart(
        DISTINCT_ADDRESSES_TITLE,
        vec![
            SeriesInput::new(DISTINCT_ADDRESSES_TITLE, &addresses)?,
            SeriesInput::new(DISTINCT_BACKTRACES_TITLE, &backtraces)?,
        ],
        None,
    )))
}

/// A single distinct-crash series for one dedup key and filter
///
/// Gated like [`aggregated_chart`].
pub fn distinct_chart(
    store: &impl CampaignStore,
    campaign_id: CampaignId,
    key: DedupKey,
    filter: &CrashFilter,
) -> Result<Option<ChartSpec>, SeriesError> {
    let campaign = store.campaign(campaign_id)?;
    if !campaign.started || !store.has_crashes(campaign_id)? {
        return Ok(None);
    }

    let points = distinct_crash_series_for(store, campaign_id, key, filter)?;
    let title = match key {
        DedupKey::Address => DISTINCT_ADDRESSES_TITLE,
        DedupKey::Backtrace => DISTINCT_BACKTRACES_TITLE,
    };

    Ok(Some(build_chart(
        title,
        vec![SeriesInput::new(title, &points)?],
        None,
    )))
}

/// One snapshot property over time, one series per run
///
/// The property name is checked before anything else. `None` while the
/// campaign has not started or none of its runs reported a snapshot.
pub fn property_chart(
    store: &impl CampaignStore,
    campaign_id: CampaignId,
    property_name: &str,
) -> Result<Option<ChartSpec>, SeriesError> {
    let property: SnapshotProperty = property_name.parse()?;

    let campaign = store.campaign(campaign_id)?;
    let runs = store.list_runs(campaign_id)?;
    if !campaign.started || !runs.iter().any(|r| r.has_snapshots()) {
        debug!("Campaign {} has no snapshots yet", campaign_id);
        return Ok(None);
    }

    let series = map_snapshot_series(&runs, property)?
        .into_iter()
        .map(|s| SeriesInput::new(s.name, &s.points))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(build_chart(&property.title(), series, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Campaign, Crash, Dataset, FuzzerRun, Snapshot};
    use crate::store::MemoryStore;
    use crate::utils::error::{GraphError, StoreError};

    fn store(started: bool, with_crashes: bool) -> MemoryStore {
        let crashes = if with_crashes {
            vec![Crash {
                id: 1,
                campaign_id: 1,
                instance_id: 1,
                created: 20,
                address: Some("0x41414141".to_string()),
                backtrace: Some("main;parse".to_string()),
                crash_in_debugger: true,
                signal: Some(11),
            }]
        } else {
            Vec::new()
        };

        MemoryStore::new(Dataset {
            version: "1.0.0".to_string(),
            campaigns: vec![Campaign { id: 1, name: "libpng".to_string(), started }],
            fuzzers: vec![FuzzerRun {
                id: 1,
                campaign_id: 1,
                name: "master".to_string(),
                started: true,
                start_time: 0,
                last_update: 100,
                snapshots: vec![Snapshot { unix_time: 10, execs_per_sec: 250.0, ..Default::default() }],
            }],
            crashes,
        })
    }

    #[test]
    fn test_aggregated_chart_gating() {
        assert!(aggregated_chart(&store(false, true), 1).unwrap().is_none());
        assert!(aggregated_chart(&store(true, false), 1).unwrap().is_none());
    }

    #[test]
    fn test_aggregated_chart_series() {
        let chart = aggregated_chart(&store(true, true), 1).unwrap().unwrap();

        assert_eq!(chart.title.text, "Distinct Addresses");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].name, "Distinct Backtraces");
        assert_eq!(
            chart.series[0].data,
            serde_json::json!([[0, 0], [1, 1], [100000, 1]])
        );
    }

    #[test]
    fn test_property_chart() {
        let chart = property_chart(&store(true, false), 1, "execs_per_sec")
            .unwrap()
            .unwrap();

        assert_eq!(chart.title.text, "Execs Per Sec");
        assert_eq!(chart.series[0].name, "master");
        assert_eq!(chart.series[0].data, serde_json::json!([[10000, 250.0]]));
    }

    #[test]
    fn test_property_chart_unknown_property_checked_first() {
        let err = property_chart(&store(false, false), 42, "nope").unwrap_err();
        assert!(matches!(err, SeriesError::Graph(GraphError::UnknownProperty(_))));
    }

    #[test]
    fn test_unknown_campaign() {
        let err = aggregated_chart(&store(true, true), 7).unwrap_err();
        assert!(matches!(err, SeriesError::Store(StoreError::UnknownCampaign(7))));
    }

    #[test]
    fn test_aligned_series_for_requires_runs() {
        let mut s = store(true, false).dataset().clone();
        s.fuzzers.clear();
        let err = aligned_series_for(&MemoryStore::new(s), 1, "paths_total").unwrap_err();
        assert!(matches!(err, SeriesError::Graph(GraphError::EmptyInput)));
    }

    #[test]
    fn test_distinct_crash_series_for() {
        let points =
            distinct_crash_series_for(&store(true, true), 1, DedupKey::Address, &CrashFilter::default())
                .unwrap();
        assert_eq!(points, vec![(0, 0), (1, 1), (100_000, 1)]);
    }
}
