//! Campaign-relative time alignment.
//!
//! Fuzzer runs of a campaign may run back to back, overlap, or leave idle
//! periods between them. Each run gets an offset such that
//!
//! `(timestamp - offset) * 1000`
//!
//! places every event of every run on one continuous millisecond axis with
//! the idle periods compressed to zero width.

use crate::model::{FuzzerRun, RunId};
use crate::utils::config::MS_PER_SECOND;
use crate::utils::error::GraphError;
use log::{debug, warn};
use std::collections::HashMap;

/// Compute the per-run time offsets
///
/// **Public** - main entry point for time alignment
///
/// # Arguments
/// * `runs` - Fuzzer runs ordered by start time (ascending)
///
/// # Returns
/// One offset (epoch seconds) per run, in input order. The first offset is
/// the first run's start time; every idle gap between the busy window so far
/// and a later run's start is added to all following offsets.
///
/// # Errors
/// * `GraphError::EmptyInput` - no runs to align
pub fn compute_offsets(runs: &[FuzzerRun]) -> Result<Vec<i64>, GraphError> {
    let first = runs.first().ok_or(GraphError::EmptyInput)?;

    if runs.windows(2).any(|w| w[1].start_time < w[0].start_time) {
        warn!("Runs are not ordered by start time; aligned series may overlap");
    }

    let mut cursor_start = first.start_time;
    let mut cursor_stop = first.last_activity();
    let mut offsets = Vec::with_capacity(runs.len());

    for run in runs {
        if run.start_time > cursor_stop {
            debug!(
                "Run {} starts {}s after previous activity, absorbing gap",
                run.id,
                run.start_time - cursor_stop
            );
            cursor_start += run.start_time - cursor_stop;
        }
        cursor_stop = run.last_activity();
        offsets.push(cursor_start);
    }

    Ok(offsets)
}

/// Offsets keyed by run, plus the aligned end of observed data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    offsets: HashMap<RunId, i64>,
    end: i64,
}

impl Timeline {
    /// Align a set of runs ordered by start time
    ///
    /// The end of data is the last activity of the last (latest-starting)
    /// run, on the aligned axis.
    pub fn from_runs(runs: &[FuzzerRun]) -> Result<Self, GraphError> {
        let offsets = compute_offsets(runs)?;

        let end = match (runs.last(), offsets.last()) {
            (Some(run), Some(&offset)) => to_aligned(run.last_activity(), offset),
            _ => return Err(GraphError::EmptyInput),
        };

        let offsets = runs.iter().map(|r| r.id).zip(offsets).collect();

        Ok(Self { offsets, end })
    }

    pub fn offset(&self, run: RunId) -> Option<i64> {
        self.offsets.get(&run).copied()
    }

    /// Aligned milliseconds of `timestamp` for an event of `run`
    pub fn align(&self, run: RunId, timestamp: i64) -> Option<i64> {
        self.offset(run).map(|offset| to_aligned(timestamp, offset))
    }

    /// Aligned milliseconds of the end of observed data
    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Seconds since `offset`, as milliseconds
pub fn to_aligned(timestamp: i64, offset: i64) -> i64 {
    (timestamp - offset) * MS_PER_SECOND
}
