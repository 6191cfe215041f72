//! Crash deduplication keys and filters.

use super::schema::{Crash, RunId};
use crate::utils::error::GraphError;
use std::fmt;
use std::str::FromStr;

/// Attribute used to collapse duplicate crash reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DedupKey {
    Address,
    Backtrace,
}

impl DedupKey {
    pub fn name(self) -> &'static str {
        match self {
            DedupKey::Address => "address",
            DedupKey::Backtrace => "backtrace",
        }
    }

    /// Key value of a crash; crashes without one never count as distinct
    pub fn value_of(self, crash: &Crash) -> Option<&str> {
        match self {
            DedupKey::Address => crash.address.as_deref(),
            DedupKey::Backtrace => crash.backtrace.as_deref(),
        }
    }
}

impl FromStr for DedupKey {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "address" => Ok(DedupKey::Address),
            "backtrace" => Ok(DedupKey::Backtrace),
            other => Err(GraphError::UnknownDedupKey(other.to_string())),
        }
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicate selecting which crashes take part in distinct counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashFilter {
    /// Only crashes reproduced under the debugger
    pub in_debugger_only: bool,

    /// Restrict to crashes from a single run
    pub run: Option<RunId>,

    /// Restrict to crashes raised by a single signal
    pub signal: Option<i32>,
}

impl Default for CrashFilter {
    fn default() -> Self {
        Self {
            in_debugger_only: true,
            run: None,
            signal: None,
        }
    }
}

impl CrashFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_crashes(mut self) -> Self {
        self.in_debugger_only = false;
        self
    }

    pub fn with_run(mut self, run: RunId) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_signal(mut self, signal: i32) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn matches(&self, crash: &Crash) -> bool {
        if self.in_debugger_only && !crash.crash_in_debugger {
            return false;
        }
        if self.run.is_some_and(|run| run != crash.instance_id) {
            return false;
        }
        if self.signal.is_some() && self.signal != crash.signal {
            return false;
        }
        true
    }
}
