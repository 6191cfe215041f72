//! Campaign data model.
//!
//! This module defines:
//! - Campaigns, fuzzer runs, snapshots and crashes as stored in a dump
//! - The set of graphable snapshot properties
//! - Crash dedup keys and filters

pub mod crash;
pub mod property;
pub mod schema;

// Re-export main types
pub use crash::{CrashFilter, DedupKey};
pub use property::SnapshotProperty;
pub use schema::{Campaign, CampaignId, Crash, CrashId, Dataset, FuzzerRun, RunId, Snapshot};
