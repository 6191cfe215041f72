//! Graphable snapshot properties.
//!
//! Parsing a property name is the capability check for "does a snapshot
//! expose this property": only names listed here resolve.

use super::schema::Snapshot;
use crate::utils::error::GraphError;
use std::fmt;
use std::str::FromStr;

/// A numeric snapshot property that can be plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotProperty {
    UnixTime,
    CyclesDone,
    CurPath,
    PathsTotal,
    PendingTotal,
    PendingFavs,
    MapSize,
    UniqueCrashes,
    UniqueHangs,
    MaxDepth,
    ExecsPerSec,
}

impl SnapshotProperty {
    pub const ALL: [SnapshotProperty; 11] = [
        SnapshotProperty::UnixTime,
        SnapshotProperty::CyclesDone,
        SnapshotProperty::CurPath,
        SnapshotProperty::PathsTotal,
        SnapshotProperty::PendingTotal,
        SnapshotProperty::PendingFavs,
        SnapshotProperty::MapSize,
        SnapshotProperty::UniqueCrashes,
        SnapshotProperty::UniqueHangs,
        SnapshotProperty::MaxDepth,
        SnapshotProperty::ExecsPerSec,
    ];

    /// Column name as stored on the snapshot
    pub fn name(self) -> &'static str {
        match self {
            SnapshotProperty::UnixTime => "unix_time",
            SnapshotProperty::CyclesDone => "cycles_done",
            SnapshotProperty::CurPath => "cur_path",
            SnapshotProperty::PathsTotal => "paths_total",
            SnapshotProperty::PendingTotal => "pending_total",
            SnapshotProperty::PendingFavs => "pending_favs",
            SnapshotProperty::MapSize => "map_size",
            SnapshotProperty::UniqueCrashes => "unique_crashes",
            SnapshotProperty::UniqueHangs => "unique_hangs",
            SnapshotProperty::MaxDepth => "max_depth",
            SnapshotProperty::ExecsPerSec => "execs_per_sec",
        }
    }

    /// Human-readable title, e.g. `execs_per_sec` -> "Execs Per Sec"
    pub fn title(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Read this property from a snapshot
    pub fn value_of(self, snapshot: &Snapshot) -> f64 {
        match self {
            SnapshotProperty::UnixTime => snapshot.unix_time as f64,
            SnapshotProperty::CyclesDone => snapshot.cycles_done as f64,
            SnapshotProperty::CurPath => snapshot.cur_path as f64,
            SnapshotProperty::PathsTotal => snapshot.paths_total as f64,
            SnapshotProperty::PendingTotal => snapshot.pending_total as f64,
            SnapshotProperty::PendingFavs => snapshot.pending_favs as f64,
            SnapshotProperty::MapSize => snapshot.map_size,
            SnapshotProperty::UniqueCrashes => snapshot.unique_crashes as f64,
            SnapshotProperty::UniqueHangs => snapshot.unique_hangs as f64,
            SnapshotProperty::MaxDepth => snapshot.max_depth as f64,
            SnapshotProperty::ExecsPerSec => snapshot.execs_per_sec,
        }
    }
}

impl FromStr for SnapshotProperty {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SnapshotProperty::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| GraphError::UnknownProperty(name.to_string()))
    }
}

impl fmt::Display for SnapshotProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
