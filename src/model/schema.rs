//! Campaign data model as exported from the dashboard database.
//!
//! Relationships are expressed through ids: a run points back at its
//! campaign, a crash at its campaign and the run (instance) that found it.
//! Snapshots are owned by their run.

use serde::{Deserialize, Serialize};

pub type CampaignId = u64;
pub type RunId = u64;
pub type CrashId = u64;

/// Top-level campaign dump read by the in-memory store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Schema version for compatibility checking
    pub version: String,

    #[serde(default)]
    pub campaigns: Vec<Campaign>,

    #[serde(default)]
    pub fuzzers: Vec<FuzzerRun>,

    #[serde(default)]
    pub crashes: Vec<Crash>,
}

/// A grouping of fuzzer runs and the crashes they found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,

    pub name: String,

    /// No graph data exists until the campaign has been started
    #[serde(default)]
    pub started: bool,
}

/// One execution instance of a fuzzer process within a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzerRun {
    pub id: RunId,

    pub campaign_id: CampaignId,

    pub name: String,

    #[serde(default)]
    pub started: bool,

    /// Epoch seconds
    pub start_time: i64,

    /// Epoch seconds of the last status report
    pub last_update: i64,

    /// Ordered by `unix_time`
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

impl FuzzerRun {
    /// Latest moment this run is known to have been active
    ///
    /// The later of the last status report and the newest snapshot, so it
    /// only ever moves forward while the fuzzer is alive.
    pub fn last_activity(&self) -> i64 {
        self.snapshots
            .last()
            .map_or(self.last_update, |s| s.unix_time.max(self.last_update))
    }

    pub fn has_snapshots(&self) -> bool {
        !self.snapshots.is_empty()
    }
}

/// Periodic measurement of a run's live metrics (AFL `fuzzer_stats` fields)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Epoch seconds
    pub unix_time: i64,

    #[serde(default)]
    pub cycles_done: u64,

    #[serde(default)]
    pub cur_path: u64,

    #[serde(default)]
    pub paths_total: u64,

    #[serde(default)]
    pub pending_total: u64,

    #[serde(default)]
    pub pending_favs: u64,

    /// Bitmap coverage percentage
    #[serde(default)]
    pub map_size: f64,

    #[serde(default)]
    pub unique_crashes: u64,

    #[serde(default)]
    pub unique_hangs: u64,

    #[serde(default)]
    pub max_depth: u64,

    #[serde(default)]
    pub execs_per_sec: f64,
}

/// A crash report recorded for a campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crash {
    pub id: CrashId,

    pub campaign_id: CampaignId,

    /// Run that produced the crash
    pub instance_id: RunId,

    /// Epoch seconds
    pub created: i64,

    /// Faulting address
    #[serde(default)]
    pub address: Option<String>,

    /// Backtrace signature
    #[serde(default)]
    pub backtrace: Option<String>,

    /// Crash was reproduced under the debugger
    #[serde(default)]
    pub crash_in_debugger: bool,

    #[serde(default)]
    pub signal: Option<i32>,
}
