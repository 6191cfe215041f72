//! Cumulative distinct-crash series.
//!
//! Input crashes are first occurrences only (one per dedup key value),
//! ordered by creation time. The output is a step function of the number of
//! distinct crashes seen so far against aligned campaign time, shaped for a
//! line chart: every increase is drawn as a 1ms-wide vertical step instead
//! of a diagonal.

use super::align::Timeline;
use crate::model::{Crash, FuzzerRun};
use crate::utils::config::STEP_WIDTH_MS;
use crate::utils::error::GraphError;
use log::debug;

/// (aligned milliseconds, distinct crashes)
pub type CountPoint = (i64, u64);

/// Build the distinct-crash series for a campaign
///
/// **Public** - main entry point for crash aggregation
///
/// # Arguments
/// * `crashes` - Deduplicated first occurrences, ordered by creation time
/// * `runs` - The campaign's started runs, ordered by start time
///
/// # Errors
/// * `GraphError::NoRuns` - no runs, so there is no end of data to extend to
/// * `GraphError::MissingOffset` - a crash belongs to a run not in `runs`
pub fn aggregate_distinct(
    crashes: &[Crash],
    runs: &[FuzzerRun],
) -> Result<Vec<CountPoint>, GraphError> {
    let timeline = Timeline::from_runs(runs).map_err(|e| match e {
        GraphError::EmptyInput => GraphError::NoRuns,
        other => other,
    })?;

    step_series(crashes, &timeline)
}

/// Build the distinct-crash series against an existing timeline
///
/// The series is extended to `timeline.end()`.
pub fn step_series(crashes: &[Crash], timeline: &Timeline) -> Result<Vec<CountPoint>, GraphError> {
    let aligned = crashes
        .iter()
        .map(|crash| {
            timeline
                .align(crash.instance_id, crash.created)
                .ok_or(GraphError::MissingOffset {
                    crash: crash.id,
                    run: crash.instance_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Aggregating {} distinct crashes up to {}ms",
        aligned.len(),
        timeline.end()
    );

    Ok(step_points(aligned, timeline.end()))
}

/// Fold aligned crash times into step points
///
/// Crashes landing on the same aligned instant as the previous one are
/// coalesced into a single step. Times are clamped so the series never
/// moves backwards, which can otherwise happen when overlapping runs carry
/// different offsets.
pub fn step_points(aligned_times: impl IntoIterator<Item = i64>, final_time: i64) -> Vec<CountPoint> {
    let mut points = Vec::new();
    let mut last_time = 0;
    let mut last_count = 0;
    let mut count = 0;

    for t in aligned_times {
        let t = t.max(last_time);
        count += 1;

        if t == last_time {
            continue;
        }

        points.push((last_time, last_count));
        points.push((last_time + STEP_WIDTH_MS, count));
        last_time = t;
        last_count = count;
    }

    // Crashes coalesced at the last instant still need their step
    if count > last_count {
        points.push((last_time, last_count));
        points.push((last_time + STEP_WIDTH_MS, count));
        last_count = count;
    }

    let tail = points.last().map_or(final_time, |&(t, _)| final_time.max(t));
    points.push((tail, last_count));

    points
}
